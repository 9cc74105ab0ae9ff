use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{CollectionEntity, SingletonDocument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Training {
    pub name: String,
    pub provider: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    /// One bullet per entry.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Icons the public site knows how to draw. Anything else is shown as a globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Facebook,
    Twitter,
    Instagram,
    MessageCircle,
    Mail,
    Globe,
}

impl SocialIcon {
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "github" => SocialIcon::Github,
            "linkedin" => SocialIcon::Linkedin,
            "facebook" => SocialIcon::Facebook,
            "twitter" => SocialIcon::Twitter,
            "instagram" => SocialIcon::Instagram,
            "messagecircle" => SocialIcon::MessageCircle,
            "mail" => SocialIcon::Mail,
            _ => SocialIcon::Globe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Stored as submitted; see [`SocialLink::glyph`].
    #[schema(example = "Github")]
    pub icon: String,
}

impl SocialLink {
    pub fn glyph(&self) -> SocialIcon {
        SocialIcon::resolve(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavMenuItem {
    pub name: String,
    pub href: String,
    /// Sort key; ties keep stored order.
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    #[schema(example = "hello@example.com")]
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_photo: String,
    pub hero_background: String,
}

impl CollectionEntity for Skill {
    const FILE_NAME: &'static str = "skills.json";
    const LABEL: &'static str = "skill";
    const PLURAL_LABEL: &'static str = "skills";
}

impl CollectionEntity for Project {
    const FILE_NAME: &'static str = "projects.json";
    const LABEL: &'static str = "project";
    const PLURAL_LABEL: &'static str = "projects";
}

impl CollectionEntity for Certification {
    const FILE_NAME: &'static str = "certifications.json";
    const LABEL: &'static str = "certification";
    const PLURAL_LABEL: &'static str = "certifications";
}

impl CollectionEntity for Training {
    const FILE_NAME: &'static str = "training.json";
    const LABEL: &'static str = "training";
    const PLURAL_LABEL: &'static str = "trainings";
}

impl CollectionEntity for Experience {
    const FILE_NAME: &'static str = "experience.json";
    const LABEL: &'static str = "experience";
    const PLURAL_LABEL: &'static str = "experiences";
}

impl CollectionEntity for Blog {
    const FILE_NAME: &'static str = "blogs.json";
    const LABEL: &'static str = "blog";
    const PLURAL_LABEL: &'static str = "blogs";
}

impl CollectionEntity for SocialLink {
    const FILE_NAME: &'static str = "social.json";
    const LABEL: &'static str = "social link";
    const PLURAL_LABEL: &'static str = "social links";
}

impl CollectionEntity for NavMenuItem {
    const FILE_NAME: &'static str = "nav-menu.json";
    const LABEL: &'static str = "navigation menu item";
    const PLURAL_LABEL: &'static str = "navigation menu items";
}

impl CollectionEntity for Course {
    const FILE_NAME: &'static str = "courses.json";
    const LABEL: &'static str = "course";
    const PLURAL_LABEL: &'static str = "courses";
}

impl SingletonDocument for ContactInfo {
    const FILE_NAME: &'static str = "contact.json";
    const LABEL: &'static str = "contact info";

    fn validate(&self) -> Result<(), String> {
        if EmailAddress::is_valid(self.email.trim()) {
            Ok(())
        } else {
            Err("email must be a valid address".to_string())
        }
    }
}

impl SingletonDocument for ProfileInfo {
    const FILE_NAME: &'static str = "profile.json";
    const LABEL: &'static str = "profile";
}
