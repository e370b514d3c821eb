pub mod contacts;
pub mod home;
pub mod organizations;
