//! UI Components

mod dropdown;
mod header;
mod home_page;
mod progress_ring;
mod subtask_list;
mod task_list;
mod task_page;
mod task_section;

pub use dropdown::{CategoryDropdown, FilterDropdown};
pub use header::Header;
pub use home_page::HomePage;
pub use progress_ring::ProgressRing;
pub use subtask_list::SubTasksList;
pub use task_list::TaskList;
pub use task_page::TaskPage;
pub use task_section::TaskSection;
