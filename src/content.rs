//! Fixed content for the SenShop concept board.
//! Four top-level section notes plus three detail columns (journey, sitemap,
//! flow). Every note is expressed as a [`NotePlan`] so the populate loop and
//! the tests share one definition of what gets created where.

use crate::miro::{Position, StickyColor};

pub const BOARD_NAME: &str = "SenShop Concept Board";
pub const BOARD_DESCRIPTION: &str = "Project concept overview: idea, journey, sitemap, flow";

/// One planned sticky note: what to write, where to put it, how to color it.
/// The target board is deliberately not part of the plan; it is supplied once
/// by the caller issuing the creation calls.
#[derive(Debug, Clone)]
pub struct NotePlan {
    /// Short name used in progress output and failure reports.
    pub label: String,
    /// Note body; may carry the limited HTML Miro renders (`<b>`, `<br>`).
    pub content: String,
    pub position: Position,
    pub color: StickyColor,
}

struct Section {
    title: &'static str,
    body: &'static str,
    position: Position,
    color: StickyColor,
}

const SECTIONS: [Section; 4] = [
    Section {
        title: "\u{1F9E0} Idea Statement",
        body: "This project is a curated e-commerce experience built on React and Medusa. \
               Users browse digital art exhibitions and themed collections. Each artwork can \
               be purchased as a digital download or physical product (framed print, apparel) \
               fulfilled by Print-on-Demand partners like Printful or Gelato. The shopping \
               experience focuses on storytelling, visual exploration, and easy checkout via \
               Stripe with automated invoice generation.",
        position: Position { x: 0, y: 0 },
        color: StickyColor::LightYellow,
    },
    Section {
        title: "\u{1F9ED} User Journey Map",
        body: "Discovery \u{2192} Exploration \u{2192} Evaluation \u{2192} Decision \u{2192} \
               Fulfillment \u{2192} Sharing\n(See details below)",
        position: Position { x: 500, y: 0 },
        color: StickyColor::LightBlue,
    },
    Section {
        title: "\u{1F5C2}\u{FE0F} Sitemap",
        body: "Home > About, Collections, Exhibitions, Search/Filter, Cart, Checkout, \
               User Account, Legal\n(See details below)",
        position: Position { x: 0, y: 400 },
        color: StickyColor::LightGreen,
    },
    Section {
        title: "\u{1F504} User Flow",
        body: "Visit Home Page \u{2192} Click Collection \u{2192} View Overview \u{2192} \
               Click Artwork \u{2192} Select 'Framed Print' \u{2192} Add to Cart \u{2192} \
               Open Cart \u{2192} Stripe Checkout \u{2192} Order Confirmation \u{2192} \
               Delivery/Tracking",
        position: Position { x: 500, y: 400 },
        color: StickyColor::LightPink,
    },
];

struct JourneyStage {
    stage: &'static str,
    action: &'static str,
    emotion: &'static str,
    channel: &'static str,
}

const JOURNEY_STAGES: [JourneyStage; 6] = [
    JourneyStage {
        stage: "Discovery",
        action: "User sees a post or ad on Instagram featuring an artwork.",
        emotion: "Curious, inspired",
        channel: "Social Media (Instagram, Pinterest)",
    },
    JourneyStage {
        stage: "Exploration",
        action: "User visits homepage, browses collections and exhibitions.",
        emotion: "Engaged, exploratory",
        channel: "Website",
    },
    JourneyStage {
        stage: "Evaluation",
        action: "User clicks on a specific artwork, reads about it, checks purchase options.",
        emotion: "Interested, comparing options",
        channel: "Website",
    },
    JourneyStage {
        stage: "Decision",
        action: "User selects framed print, adds to cart, and checks out.",
        emotion: "Excited, ready",
        channel: "Website (Stripe Checkout)",
    },
    JourneyStage {
        stage: "Fulfillment",
        action: "Receives confirmation email and tracking details.",
        emotion: "Satisfied",
        channel: "Email",
    },
    JourneyStage {
        stage: "Sharing",
        action: "Posts image of artwork on wall or t-shirt on social media.",
        emotion: "Proud, joyful",
        channel: "Instagram, WhatsApp, Threads",
    },
];

const SITEMAP_ITEMS: [&str; 8] = [
    "Home",
    "About",
    "Collections",
    "Exhibitions",
    "Cart",
    "Checkout",
    "User Account",
    "Legal",
];

const FLOW_STEPS: [&str; 10] = [
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
];

/// Layout of one detail column: fixed x, notes stacked downward from
/// `base_y` in `step_y` increments. Each group has its own x-offset so the
/// three clusters stay visually separate on the board.
struct Column {
    x: i64,
    base_y: i64,
    step_y: i64,
    color: StickyColor,
}

const JOURNEY_COLUMN: Column = Column {
    x: 900,
    base_y: 0,
    step_y: 120,
    color: StickyColor::LightBlue,
};

const SITEMAP_COLUMN: Column = Column {
    x: 0,
    base_y: 800,
    step_y: 110,
    color: StickyColor::LightGreen,
};

const FLOW_COLUMN: Column = Column {
    x: 1300,
    base_y: 0,
    step_y: 100,
    color: StickyColor::LightPink,
};

fn stack(column: &Column, items: impl IntoIterator<Item = (String, String)>) -> Vec<NotePlan> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, (label, content))| NotePlan {
            label,
            content,
            position: Position {
                x: column.x,
                y: column.base_y + i as i64 * column.step_y,
            },
            color: column.color,
        })
        .collect()
}

/// The four top-level section notes, in their fixed order.
pub fn section_notes() -> Vec<NotePlan> {
    SECTIONS
        .iter()
        .map(|section| NotePlan {
            label: section.title.to_string(),
            content: format!("<b>{}</b><br>{}", section.title, section.body),
            position: section.position,
            color: section.color,
        })
        .collect()
}

/// The journey detail column, one note per stage in declaration order.
pub fn journey_notes() -> Vec<NotePlan> {
    stack(
        &JOURNEY_COLUMN,
        JOURNEY_STAGES.iter().map(|s| {
            (
                s.stage.to_string(),
                format!(
                    "<b>{}</b><br>Action: {}<br>Emotion: {}<br>Channel: {}",
                    s.stage, s.action, s.emotion, s.channel
                ),
            )
        }),
    )
}

/// The sitemap detail column, one note per page in declaration order.
pub fn sitemap_notes() -> Vec<NotePlan> {
    stack(
        &SITEMAP_COLUMN,
        SITEMAP_ITEMS
            .iter()
            .map(|label| (label.to_string(), label.to_string())),
    )
}

/// The flow detail column, one note per step in declaration order.
pub fn flow_notes() -> Vec<NotePlan> {
    stack(
        &FLOW_COLUMN,
        FLOW_STEPS
            .iter()
            .map(|step| (step.to_string(), step.to_string())),
    )
}

/// Every note the populate run issues, in issue order: the four sections,
/// then the journey, sitemap, and flow columns.
pub fn planned_notes() -> Vec<NotePlan> {
    let mut notes = section_notes();
    notes.extend(journey_notes());
    notes.extend(sitemap_notes());
    notes.extend(flow_notes());
    notes
}

// *************** Tests ***************

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sections_plus_twenty_four_details() {
        assert_eq!(section_notes().len(), 4);
        assert_eq!(journey_notes().len(), 6);
        assert_eq!(sitemap_notes().len(), 8);
        assert_eq!(flow_notes().len(), 10);
        assert_eq!(planned_notes().len(), 28);
    }

    #[test]
    fn sections_come_first_in_fixed_order() {
        let notes = planned_notes();
        assert!(notes[0].label.contains("Idea Statement"));
        assert!(notes[1].label.contains("User Journey Map"));
        assert!(notes[2].label.contains("Sitemap"));
        assert!(notes[3].label.contains("User Flow"));
    }

    #[test]
    fn section_colors_are_distinct() {
        let notes = section_notes();
        for i in 0..notes.len() {
            for j in i + 1..notes.len() {
                assert_ne!(notes[i].color, notes[j].color);
            }
        }
    }

    fn assert_column(notes: &[NotePlan], x: i64, base_y: i64, step_y: i64, color: StickyColor) {
        for (i, note) in notes.iter().enumerate() {
            assert_eq!(note.position.x, x, "x drifted at {}", note.label);
            assert_eq!(note.position.y, base_y + i as i64 * step_y);
            assert_eq!(note.color, color);
        }
    }

    #[test]
    fn journey_column_steps_down_by_120() {
        assert_column(&journey_notes(), 900, 0, 120, StickyColor::LightBlue);
    }

    #[test]
    fn sitemap_column_steps_down_by_110() {
        assert_column(&sitemap_notes(), 0, 800, 110, StickyColor::LightGreen);
    }

    #[test]
    fn flow_column_steps_down_by_100() {
        assert_column(&flow_notes(), 1300, 0, 100, StickyColor::LightPink);
    }

    #[test]
    fn journey_notes_carry_stage_details() {
        let first = &journey_notes()[0];
        assert_eq!(first.label, "Discovery");
        assert!(first.content.starts_with("<b>Discovery</b>"));
        assert!(first.content.contains("Action: "));
        assert!(first.content.contains("Emotion: Curious, inspired"));
        assert!(first.content.contains("Channel: Social Media (Instagram, Pinterest)"));
    }

    #[test]
    fn detail_columns_do_not_collide() {
        let details: Vec<NotePlan> = journey_notes()
            .into_iter()
            .chain(sitemap_notes())
            .chain(flow_notes())
            .collect();
        for i in 0..details.len() {
            for j in i + 1..details.len() {
                assert_ne!(
                    details[i].position, details[j].position,
                    "{} and {} overlap",
                    details[i].label, details[j].label
                );
            }
        }
    }
}
