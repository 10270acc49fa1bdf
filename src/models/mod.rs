//! Domain records and the DTOs used for serializing/deserializing HTTP
//! request and response bodies.

pub mod message;
pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use message::{Message, MessageView};
pub use requests::{
    LoginRequest, MessageRequest, PalindromeRequest, RegisterRequest, Registration, RoleRequest,
};
pub use responses::{
    CacheReport, DeletedPayload, Envelope, HealthResponse, LoginPayload, MessagePayload,
    MessagesPayload, PalindromePayload, UserPayload, UsersPayload,
};
pub use user::{PublicUser, Role, User};
