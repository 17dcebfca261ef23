//! Presentation deck: the static slide data plus the routes that serve it.

pub mod model;
pub mod routes;

use rocket::fs::{FileServer, relative};
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

/// Builds the presentation server: slide deck in managed state, template
/// rendering, routes, and the static asset mount.
pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .manage(model::deck())
        .attach(Template::fairing())
        .mount("/", routes::routes())
        .mount("/static", FileServer::from(relative!("static")))
}
