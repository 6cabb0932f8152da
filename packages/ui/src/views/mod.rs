mod common;
pub use common::{EmptyState, LoadingState, PageHeader, SearchForm, StatCard};

mod login;
pub use login::LoginView;

mod dashboard_layout;
pub use dashboard_layout::{DashboardLayoutView, Section};

mod overview;
pub use overview::OverviewView;

mod attendance;
pub use attendance::AttendanceView;

mod resources;
pub use resources::{BooksView, PracticesView};

mod teachers;
pub use teachers::TeachersView;

mod profile;
pub use profile::ProfileView;
