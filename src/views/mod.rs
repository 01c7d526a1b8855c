mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod home;
mod navbar;
mod not_found;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::ExperienceList;
pub use footer::Footer;
pub use hero::Hero;
pub use home::Home;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
