// Landing page sections, in page order.

mod about;
mod categories;
mod featured;
mod footer;
mod hero;
mod location;
mod nav;

pub use about::About;
pub use categories::Categories;
pub use featured::Featured;
pub use footer::Footer;
pub use hero::Hero;
pub use location::Location;
pub use nav::Navbar;
