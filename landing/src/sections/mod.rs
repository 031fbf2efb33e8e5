// Portfolio page sections
// Built by Axel Sundqvist (c)2025

mod about;
mod blog;
mod console;
mod contact;
mod demos;
mod footer;
mod hero;
mod nav;
mod projects;

pub use about::About;
pub use blog::Blog;
pub use console::ConsoleBanner;
pub use contact::Contact;
pub use demos::Demos;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
