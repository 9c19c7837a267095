use arcalab_contact::ContactMessage;

pub fn message_subject(message: &ContactMessage) -> String {
    format!("New message from contact page: {}", message.subject)
}

pub fn message_body(message: &ContactMessage) -> String {
    format!(
        r#"
Email: {}
Name: {}
Subject: {}
Message: {}
"#,
        message.email, message.name, message.subject, message.message
    )
}
