pub mod add;
pub mod delete;
pub mod list;
pub mod plan;
pub mod recent;
pub mod record;
pub mod review;
pub mod show;
pub mod subjects;
