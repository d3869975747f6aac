//! Repository implementations, one per table.

pub mod booth;
pub mod kizhai;
pub mod member;
pub mod session;
pub mod user;

pub use booth::BoothRepository;
pub use kizhai::KizhaiRepository;
pub use member::{KizhaiMemberCount, MemberRepository};
pub use session::{SessionRepository, SessionWithUser};
pub use user::UserRepository;
