use std::path::Path;
use std::sync::Arc;

use crate::content::adapter::outgoing::JsonFileRepository;
use crate::content::application::domain::entities::{
    Blog, Certification, ContactInfo, Course, Experience, NavMenuItem, ProfileInfo, Project,
    Skill, SocialLink, Training,
};
use crate::content::application::domain::record::{CollectionEntity, SingletonDocument};
use crate::content::application::ports::incoming::use_cases::{
    CollectionUseCase, FindBlogBySlugUseCase, SingletonUseCase,
};
use crate::content::application::service::{
    CollectionService, FindBlogBySlugService, SingletonService,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub skills: Arc<dyn CollectionUseCase<Skill>>,
    pub projects: Arc<dyn CollectionUseCase<Project>>,
    pub certifications: Arc<dyn CollectionUseCase<Certification>>,
    pub training: Arc<dyn CollectionUseCase<Training>>,
    pub experience: Arc<dyn CollectionUseCase<Experience>>,
    pub blogs: Arc<dyn CollectionUseCase<Blog>>,
    pub blog_by_slug: Arc<dyn FindBlogBySlugUseCase>,
    pub social: Arc<dyn CollectionUseCase<SocialLink>>,
    pub nav_menu: Arc<dyn CollectionUseCase<NavMenuItem>>,
    pub courses: Arc<dyn CollectionUseCase<Course>>,
    pub contact_info: Arc<dyn SingletonUseCase<ContactInfo>>,
    pub profile: Arc<dyn SingletonUseCase<ProfileInfo>>,
}

/// Documents that must exist before the server starts.
pub const REQUIRED_DOCUMENTS: &[&str] = &[ContactInfo::FILE_NAME, ProfileInfo::FILE_NAME];

fn json_collection<T: CollectionEntity>(data_dir: &Path) -> Arc<dyn CollectionUseCase<T>> {
    Arc::new(CollectionService::new(JsonFileRepository::<T>::collection(
        data_dir,
    )))
}

pub fn json_singleton<T: SingletonDocument>(data_dir: &Path) -> Arc<dyn SingletonUseCase<T>> {
    Arc::new(SingletonService::new(JsonFileRepository::<T>::document(
        data_dir,
    )))
}

impl ContentUseCases {
    /// Wires every content use case to JSON documents under `data_dir`.
    pub fn json_backed(data_dir: &Path) -> Self {
        Self {
            skills: json_collection(data_dir),
            projects: json_collection(data_dir),
            certifications: json_collection(data_dir),
            training: json_collection(data_dir),
            experience: json_collection(data_dir),
            blogs: json_collection(data_dir),
            blog_by_slug: Arc::new(FindBlogBySlugService::new(
                JsonFileRepository::<Blog>::collection(data_dir),
            )),
            social: json_collection(data_dir),
            nav_menu: json_collection(data_dir),
            courses: json_collection(data_dir),
            contact_info: json_singleton(data_dir),
            profile: json_singleton(data_dir),
        }
    }
}
