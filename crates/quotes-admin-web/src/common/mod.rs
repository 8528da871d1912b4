mod navbar;
pub use navbar::Navbar;

mod route;
pub use route::Route;

pub mod icons;
