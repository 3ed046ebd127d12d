use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, Login, NotFound, Page, Profile, Search, Signup, Update},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[redirect("/", || Route::Home {})]
    #[route("/home")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/profile")]
    Profile {},

    #[route("/search")]
    Search {},

    #[route("/signup")]
    Signup {},

    #[route("/update")]
    Update {},

    #[route("/page/:id")]
    Page { id: String },

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
