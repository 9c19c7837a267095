use crate::Topic;

/// One entry of the landing page carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub project_name: &'static str,
    pub tagline: &'static str,
    pub hero_title: &'static str,
    pub hero_highlight: &'static str,
    pub hero_subtitle: &'static str,
    pub href: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        project_name: "Flying Nimbus",
        tagline: "Access all your tools and projects in one place.",
        hero_title: "Dream Big (or small)",
        hero_highlight: "Build fast, go far.",
        hero_subtitle: "AI-Powered Workstation for everyone",
        href: "/products",
    },
    Slide {
        project_name: "BitnBolt",
        tagline: "Build and manage websites through conversation.",
        hero_title: "Build and Manage Websites",
        hero_highlight: "by just thinking about it",
        hero_subtitle: "Conversational website builder and manager",
        href: "/products?card=workstation",
    },
    Slide {
        project_name: "Imagen",
        tagline: "Generate high-quality content with AI assistance.",
        hero_title: "Create content,",
        hero_highlight: "Powered by AI.",
        hero_subtitle: "AI content generation platform",
        href: "/products?card=marketplace",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
    pub meta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub audience: &'static str,
    pub bullets: &'static [&'static str],
    pub monthly: &'static str,
    pub annual: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// What the expanded card shows for a topic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub features: &'static [Feature],
    pub plans: &'static [Plan],
    pub faqs: &'static [Faq],
}

const MARKETPLACE: TopicContent = TopicContent {
    heading: "Build once, earn forever",
    intro: "Create useful tools and start monetizing immediately. The community rewards builders who solve real problems, whether you code or not.",
    features: &[
        Feature {
            title: "No-Code Builder",
            body: "Visual drag and drop, no coding needed",
            meta: "Minutes to publish",
        },
        Feature {
            title: "Vibe Coding",
            body: "Describe what you want, AI writes the code",
            meta: "Under an hour",
        },
        Feature {
            title: "SDK / Code",
            body: "Full control with the developer SDK",
            meta: "Your timeline",
        },
    ],
    plans: &[],
    faqs: &[],
};

const WORKSTATION: TopicContent = TopicContent {
    heading: "One workspace, unlimited tools",
    intro: "Save any tool from the marketplace and access them all in one place. No juggling tabs, just your tools, ready when you need them.",
    features: &[
        Feature {
            title: "Smart Scraper",
            body: "Extract data from competitor sites into clean spreadsheets",
            meta: "No code required",
        },
        Feature {
            title: "Quick Summarizer",
            body: "Turn 50-page reports into 5-minute briefs",
            meta: "Saves hours daily",
        },
        Feature {
            title: "Brand Writer",
            body: "Generate on-brand copy for social, emails and ads",
            meta: "Always consistent",
        },
        Feature {
            title: "Sheet Analyzer",
            body: "Ask questions about your data in plain English",
            meta: "Instant insights",
        },
    ],
    plans: &[],
    faqs: &[],
};

const PLANS: TopicContent = TopicContent {
    heading: "Choose your plan",
    intro: "Try, build, or monetize. Upgrade anytime.",
    features: &[],
    plans: &[
        Plan {
            name: "Free",
            audience: "Exploring",
            bullets: &["Free catalog", "Save tools", "Basic history"],
            monthly: "$0",
            annual: "$0",
        },
        Plan {
            name: "Premium",
            audience: "Building",
            bullets: &["Build tools", "Team sharing", "Adv. history"],
            monthly: "$12",
            annual: "$10",
        },
        Plan {
            name: "Pro",
            audience: "Monetizing",
            bullets: &["Publish paid", "Unlimited use", "Analytics"],
            monthly: "$24",
            annual: "$20",
        },
    ],
    faqs: &[
        Faq {
            question: "How do payouts work?",
            answer: "We issue monthly payouts to Pro builders with revenue over the threshold.",
        },
        Faq {
            question: "Can I cancel anytime?",
            answer: "Yes. Downgrades take effect at the next billing date.",
        },
        Faq {
            question: "Do you offer team pricing?",
            answer: "Contact us for volume licensing and SSO.",
        },
    ],
};

const RESOURCES: TopicContent = TopicContent {
    heading: "Learn and build",
    intro: "Guides, company news and ways to reach the team.",
    features: &[
        Feature {
            title: "About",
            body: "We build tools that help anyone create, share and monetize AI-powered apps.",
            meta: "/about",
        },
        Feature {
            title: "Blog",
            body: "Product notes, customer stories and hands-on guides.",
            meta: "/blog",
        },
        Feature {
            title: "Careers",
            body: "Join a small team shipping big things.",
            meta: "/contact?option=form",
        },
        Feature {
            title: "Contact",
            body: "We usually reply within one business day.",
            meta: "/contact",
        },
    ],
    plans: &[],
    faqs: &[],
};

impl Topic {
    pub fn content(&self) -> &'static TopicContent {
        match self {
            Topic::Marketplace => &MARKETPLACE,
            Topic::Workstation => &WORKSTATION,
            Topic::Plans => &PLANS,
            Topic::Resources => &RESOURCES,
        }
    }
}
