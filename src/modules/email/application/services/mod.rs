pub mod contact_relay_service;

pub use contact_relay_service::ContactRelayService;
