use crate::content::application::domain::entities::{Blog, ContactInfo, ProfileInfo};
use crate::email::application::domain::entities::SmtpConfig;

pub fn sample_contact_info() -> ContactInfo {
    ContactInfo {
        email: "owner@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        location: "Remote".to_string(),
    }
}

pub fn sample_profile() -> ProfileInfo {
    ProfileInfo {
        name: "Sam Rivera".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Builds web things.".to_string(),
        profile_photo: "/images/profile/me.jpg".to_string(),
        hero_background: "/images/profile/hero.jpg".to_string(),
    }
}

pub fn sample_smtp_config() -> SmtpConfig {
    SmtpConfig {
        host: "smtp.example.com".to_string(),
        port: 587,
        secure: false,
        username: "mailer".to_string(),
        password: "mailer-password".to_string(),
        from_email: "noreply@example.com".to_string(),
        from_name: "Portfolio".to_string(),
    }
}

pub fn sample_blog(slug: &str) -> Blog {
    Blog {
        title: format!("Post {}", slug),
        excerpt: "Short summary".to_string(),
        image: "/images/blog/cover.png".to_string(),
        category: "Engineering".to_string(),
        date: "2024-01-15".to_string(),
        read_time: "5 min read".to_string(),
        slug: slug.to_string(),
        content: None,
    }
}
