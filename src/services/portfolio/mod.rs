// Portfolio resource clients
//
// Typed wrappers over the transport adapter for the profile, post, and
// showcase endpoints. Reads go through the read fetcher and degrade to
// empty/default state; writes return `ApiError` for the caller to surface.

pub mod posts;
pub mod profiles;
pub mod showcases;

pub use posts::PostApi;
pub use profiles::ProfileApi;
pub use showcases::ShowcaseApi;
