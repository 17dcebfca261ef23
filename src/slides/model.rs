//! The slide deck. Hardcoded content, constructed once at server startup and
//! read-only for the process lifetime.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub content: SlideContent,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SlideContent {
    pub bullets: Vec<String>,
    pub image: String,
}

fn slide(title: &str, bullets: &[&str], image: &str) -> Slide {
    Slide {
        title: title.to_string(),
        content: SlideContent {
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            image: image.to_string(),
        },
    }
}

/// The full presentation, in slide order.
pub fn deck() -> Vec<Slide> {
    vec![
        slide(
            "The Art of Commerce",
            &[
                "Explore digital art as curated collections",
                "Buy digital downloads or physical products",
                "Storytelling meets commerce via POD",
                "Seamless checkout, instant download",
            ],
            "/static/images/slide1.jpg",
        ),
        slide(
            "User Experience Structure",
            &[
                "Full-width site tree",
                "Visual mapping",
                "Color-coded sections",
            ],
            "/static/images/slide2.jpg",
        ),
        slide(
            "Technology Foundation",
            &[
                "Frontend: React & Tailwind",
                "Backend: Medusa & PostgreSQL",
                "Deployment: Vercel & Stripe",
            ],
            "/static/images/slide3.jpg",
        ),
        slide(
            "Print-on-Demand Fulfillment",
            &[
                "Printful Integration",
                "Gelato Partnership",
                "Printify Solutions",
            ],
            "/static/images/slide4.jpg",
        ),
        slide(
            "Seamless Purchase Experience",
            &[
                "Auto-invoicing",
                "Digital downloads",
                "Tax-compliant billing",
                "Real-time status updates",
            ],
            "/static/images/slide5.jpg",
        ),
        slide(
            "Miro Board Overview",
            &[
                "View the full concept visually on Miro:",
                "[Open Miro Board](https://miro.com/app/board/uXxMiroBoardLink/)",
            ],
            "/static/images/miro_board.jpg",
        ),
        slide(
            "User Journey \u{2013} From Discovery to Delight",
            &[
                "Discovery: User sees a post or ad on Instagram featuring an artwork. (Curious, inspired)",
                "Exploration: User visits homepage, browses collections and exhibitions. (Engaged, exploratory)",
                "Evaluation: User clicks on a specific artwork, reads about it, checks purchase options. (Interested, comparing options)",
                "Decision: User selects framed print, adds to cart, and checks out. (Excited, ready)",
                "Fulfillment: Receives confirmation email and tracking details. (Satisfied)",
                "Sharing: Posts image of artwork on wall or t-shirt on social media. (Proud, joyful)",
            ],
            "/static/images/user_journey.jpg",
        ),
        slide(
            "User Flow \u{2013} Purchase a Framed Print",
            &[
                "Visit Home Page",
                "Click on a Collection",
                "View Collection Overview",
                "Click on an Artwork",
                "Select 'Framed Print' Option",
                "Add to Cart",
                "Open Cart",
                "Proceed to Stripe Checkout",
                "Receive Order Confirmation",
                "Receive Delivery / Tracking Info",
            ],
            "/static/images/user_flow.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_eight_slides_in_order() {
        let deck = deck();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck[0].title, "The Art of Commerce");
        assert_eq!(deck[7].title, "User Flow \u{2013} Purchase a Framed Print");
    }

    #[test]
    fn slides_serialize_with_nested_content_keys() {
        let value = serde_json::to_value(deck()).unwrap();
        let first = &value[0];
        assert_eq!(first["title"], "The Art of Commerce");
        assert_eq!(
            first["content"]["bullets"][0],
            "Explore digital art as curated collections"
        );
        assert_eq!(first["content"]["image"], "/static/images/slide1.jpg");
    }

    #[test]
    fn every_slide_has_bullets_and_an_image_path() {
        for slide in deck() {
            assert!(!slide.content.bullets.is_empty(), "{} has no bullets", slide.title);
            assert!(
                slide.content.image.starts_with("/static/images/"),
                "{} image path looks wrong",
                slide.title
            );
        }
    }
}
