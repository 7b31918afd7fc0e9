pub mod edit;
pub mod home;
