mod loading;
mod login;
mod terminal;

pub use loading::{Loading, LoadingWidget};
pub use login::{Field, LoginForm};
pub use terminal::Terminal;
