//! Presentation server for the SenShop concept deck.
//! Serves the rendered page at `/`, the raw deck at `/api/slides`, and the
//! slide images under `/static`.

use rocket::launch;
use senshop_concept::slides;

#[launch]
fn rocket() -> _ {
    slides::rocket()
}
