use crate::auth::adapter::outgoing::session_store_memory::InMemorySessionStore;
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::LogoutAdminUseCase,
    verify_session::VerifySessionUseCase,
};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::record::CollectionEntity;
use crate::content::application::ports::incoming::use_cases::{CollectionUseCase, SingletonUseCase};
use crate::content::application::service::{
    CollectionService, FindBlogBySlugService, SingletonService,
};
use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
use crate::email::application::domain::entities::SmtpConfig;
use crate::email::application::ports::incoming::SendContactMessageUseCase;
use crate::email::application::services::ContactRelayService;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::media::application::services::UploadImageService;
use crate::tests::support::auth_helper::test_helpers::{
    create_test_credentials, issue_admin_token, test_hasher,
};
use crate::tests::support::fixtures::{sample_contact_info, sample_profile, sample_smtp_config};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use chrono::Duration;
use std::sync::Arc;

fn memory_collection<T: CollectionEntity>() -> Arc<dyn CollectionUseCase<T>> {
    Arc::new(CollectionService::<T, _>::new(InMemoryCollection::<T>::default()))
}

pub struct TestAppStateBuilder {
    sessions: Arc<InMemorySessionStore>,
    login_admin: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    content: Option<ContentUseCases>,
    send_contact: Option<Arc<dyn SendContactMessageUseCase + Send + Sync>>,
    upload_image: Option<Arc<dyn UploadImageUseCase + Send + Sync>>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            sessions: Arc::new(InMemorySessionStore::new(Duration::hours(1))),
            login_admin: None,
            content: None,
            send_contact: None,
            upload_image: None,
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    /// Content use cases over in-memory repositories seeded with fixtures.
    pub fn in_memory_content() -> ContentUseCases {
        ContentUseCases {
            skills: memory_collection(),
            projects: memory_collection(),
            certifications: memory_collection(),
            training: memory_collection(),
            experience: memory_collection(),
            blogs: memory_collection(),
            blog_by_slug: Arc::new(FindBlogBySlugService::new(InMemoryCollection::default())),
            social: memory_collection(),
            nav_menu: memory_collection(),
            courses: memory_collection(),
            contact_info: Arc::new(SingletonService::new(InMemoryDocument::new(
                sample_contact_info(),
            ))),
            profile: Arc::new(SingletonService::new(InMemoryDocument::new(sample_profile()))),
        }
    }

    pub fn with_sessions(mut self, sessions: Arc<InMemorySessionStore>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_login_admin(mut self, uc: Arc<dyn ILoginAdminUseCase + Send + Sync>) -> Self {
        self.login_admin = Some(uc);
        self
    }

    pub fn with_content(mut self, content: ContentUseCases) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_contact(mut self, uc: Arc<dyn SendContactMessageUseCase + Send + Sync>) -> Self {
        self.send_contact = Some(uc);
        self
    }

    pub fn with_upload(
        mut self,
        uc: Arc<dyn UploadImageUseCase + Send + Sync>,
        policy: UploadPolicy,
    ) -> Self {
        self.upload_image = Some(uc);
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let sessions = self.sessions;
        let content = self.content.unwrap_or_else(Self::in_memory_content);
        let smtp_config: Arc<dyn SingletonUseCase<SmtpConfig>> = Arc::new(
            SingletonService::<SmtpConfig, _>::new(InMemoryDocument::new(sample_smtp_config())),
        );

        let send_contact = self.send_contact.unwrap_or_else(|| {
            Arc::new(ContactRelayService::new(
                Arc::new(MockEmailSender::new()),
                Arc::clone(&smtp_config),
                Arc::clone(&content.contact_info),
            ))
        });

        let upload_policy = self.upload_policy;
        let upload_image = self.upload_image.unwrap_or_else(|| {
            Arc::new(UploadImageService::new(
                DiscardingMediaStorage,
                upload_policy.clone(),
            ))
        });

        web::Data::new(AppState {
            login_admin_use_case: self.login_admin.unwrap_or_else(|| {
                Arc::new(LoginAdminUseCase::new(
                    create_test_credentials(),
                    Arc::new(test_hasher()),
                    sessions.clone(),
                ))
            }),
            verify_session_use_case: Arc::new(VerifySessionUseCase::new(sessions.clone())),
            logout_admin_use_case: Arc::new(LogoutAdminUseCase::new(sessions.clone())),
            content,
            smtp_config_use_case: smtp_config,
            send_contact_use_case: send_contact,
            upload_image_use_case: upload_image,
            upload_policy,
        })
    }

    /// Builds the state and opens an admin session in its session store.
    pub async fn build_with_admin_session(self) -> (web::Data<AppState>, String) {
        let token = issue_admin_token(self.sessions.as_ref()).await;
        (self.build(), token)
    }
}
