//! Routes serving the deck: the rendered page and the raw JSON mirror. Both
//! read the same managed state, so the two views cannot drift apart.

use rocket::serde::json::Json;
use rocket::{Route, State, get, routes};
use rocket_dyn_templates::{Template, context};

use super::model::Slide;

#[get("/")]
async fn presentation(slides: &State<Vec<Slide>>) -> Template {
    Template::render("presentation", context! { slides: slides.inner() })
}

#[get("/api/slides")]
async fn get_slides(slides: &State<Vec<Slide>>) -> Json<Vec<Slide>> {
    Json(slides.inner().clone())
}

pub fn routes() -> Vec<Route> {
    routes![presentation, get_slides]
}

#[cfg(test)]
mod tests {
    use crate::slides::model;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    fn client() -> Client {
        Client::tracked(crate::slides::rocket()).expect("valid rocket instance")
    }

    #[test]
    fn json_endpoint_mirrors_the_deck_exactly() {
        let client = client();
        let response = client.get("/api/slides").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let served: Vec<model::Slide> = response.into_json().expect("valid slide JSON");
        assert_eq!(served, model::deck());
    }

    #[test]
    fn presentation_page_renders_every_title() {
        let client = client();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));

        let body = response.into_string().expect("page body");
        for slide in model::deck() {
            assert!(body.contains(&slide.title), "missing title: {}", slide.title);
        }
    }
}
