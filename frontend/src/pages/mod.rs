pub mod admin_news;
pub mod admin_news_form;
pub mod admissions;
pub mod faculty_mobility;
pub mod home;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod programs;
pub mod resources;
pub mod student_mobility;
