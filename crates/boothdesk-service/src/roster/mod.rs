//! Roster services: members, booths, and kizhais.

pub mod booth;
pub mod kizhai;
pub mod member;

pub use booth::BoothService;
pub use kizhai::KizhaiService;
pub use member::MemberService;
