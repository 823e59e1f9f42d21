//! # Page Assembly
//!
//! Builds the canonical demo page: one `PageDef` plus its ordered sections.
//! Pure data construction, no side effects, no clocks, no randomness; the
//! same `(slug, image_url)` always yields the same output. Persisting the
//! result is the seeder's job (see [`crate::seeder`]).

use crate::error::Result;
use crate::models::{PageDef, SectionDraft, SectionType};
use crate::registry;
use serde_json::{json, Value};

/// Assembles the demo page for `slug`.
///
/// `image_url` is the public URL of a previously uploaded asset; when absent,
/// image-bearing fields are set to explicit JSON `null` rather than omitted,
/// so the keys stay visible to downstream consumers.
///
/// Sections come out in fixed order with `order_index` 0..=7:
/// hero, features, steps, categories, text-section, showcase, gallery, cta.
pub fn build_demo_page(
    slug: &str,
    image_url: Option<&str>,
) -> Result<(PageDef, Vec<SectionDraft>)> {
    let image: Value = match image_url {
        Some(url) => Value::from(url),
        None => Value::Null,
    };

    let page = PageDef {
        slug: slug.to_string(),
        title: "CMS Demo - All Sections".to_string(),
        description:
            "Comprehensive demo page showcasing all available CMS sections and features"
                .to_string(),
        is_published: true,
    };

    let bodies: Vec<(SectionType, Value)> = vec![
        (
            SectionType::Hero,
            json!({
                "headline": "Welcome to",
                "headline_highlight": "UCC IP Management System",
                "subheadline": "A comprehensive platform for managing intellectual property, protecting innovation, and promoting excellence across the university",
                "cta_text": "Get Started",
                "cta_link": "/register",
                "background_image": image,
            }),
        ),
        (
            SectionType::Features,
            json!({
                "features": [
                    {
                        "title": "Secure Storage",
                        "description": "Enterprise-grade security for your IP documents and records",
                        "icon_bg_color": "bg-blue-100",
                        "icon_color": "text-blue-600"
                    },
                    {
                        "title": "Easy Management",
                        "description": "Intuitive interface to manage and track all intellectual property",
                        "icon_bg_color": "bg-purple-100",
                        "icon_color": "text-purple-600"
                    },
                    {
                        "title": "Real-time Analytics",
                        "description": "Monitor submissions, approvals, and evaluation progress in real-time",
                        "icon_bg_color": "bg-green-100",
                        "icon_color": "text-green-600"
                    },
                    {
                        "title": "Collaboration Tools",
                        "description": "Work seamlessly with supervisors, evaluators, and stakeholders",
                        "icon_bg_color": "bg-orange-100",
                        "icon_color": "text-orange-600"
                    }
                ]
            }),
        ),
        (
            SectionType::Steps,
            json!({
                "title": "How It Works",
                "steps": [
                    {
                        "number": 1,
                        "label": "Register & Login",
                        "description": "Create your account and log in to the system"
                    },
                    {
                        "number": 2,
                        "label": "Submit IP Record",
                        "description": "Fill out the IP disclosure form with all required information"
                    },
                    {
                        "number": 3,
                        "label": "Expert Review",
                        "description": "Submit for evaluation and feedback from IP experts"
                    },
                    {
                        "number": 4,
                        "label": "Decision & Next Steps",
                        "description": "Receive decision and guidance on protecting your innovation"
                    }
                ]
            }),
        ),
        (
            SectionType::Categories,
            json!({
                "title": "Intellectual Property Types",
                "categories": [
                    { "name": "Patents", "description": "Protect your inventions and technological innovations" },
                    { "name": "Trademarks", "description": "Safeguard your brand identity and logos" },
                    { "name": "Copyright", "description": "Register and protect creative works" },
                    { "name": "Trade Secrets", "description": "Manage and protect confidential business information" },
                    { "name": "Designs", "description": "Protect industrial designs and aesthetic creations" }
                ]
            }),
        ),
        (
            SectionType::TextSection,
            json!({
                "section_title": "About IP Protection",
                "body_content": "Intellectual Property (IP) is the product of human creativity and innovation. It includes inventions, literary and artistic works, designs, and symbols used in commerce. Protecting your IP is crucial for maintaining competitive advantage, attracting investors, and ensuring your innovations benefit you and your organization.\n\nAt the University of Caloocan City, we are committed to supporting faculty, students, and researchers in protecting and commercializing their intellectual property. Our state-of-the-art management system makes it easy to disclose, evaluate, and manage all types of IP.",
                "text_alignment": "left",
                "max_width": "normal",
                "background_style": "light_gray",
                "show_divider": true,
                "text_style_preset": "default",
                "title_style": "normal",
                "text_size": "medium",
                "visual_tone": "neutral",
                "accent_icon": "none",
                "emphasize_section": false,
                "vertical_spacing": "normal"
            }),
        ),
        (
            SectionType::Showcase,
            json!({
                "title": "Our Success Stories",
                "items": [
                    {
                        "title": "Patent for Advanced Robotics",
                        "description": "Successfully filed a patent for an innovative robotics system developed by our engineering department",
                        "image_url": image,
                        "image_width": 400,
                        "image_height": 300,
                        "image_position": "center"
                    },
                    {
                        "title": "Medical Device Innovation",
                        "description": "Created a trademark for a groundbreaking medical diagnostic tool",
                        "image_url": image,
                        "image_width": 400,
                        "image_height": 300,
                        "image_position": "center"
                    },
                    {
                        "title": "Software Framework",
                        "description": "Copyrighted a comprehensive open-source software framework used by developers worldwide",
                        "image_url": image,
                        "image_width": 400,
                        "image_height": 300,
                        "image_position": "center"
                    }
                ]
            }),
        ),
        (
            SectionType::Gallery,
            json!({
                "title": "Gallery",
                "images": [
                    {
                        "url": image,
                        "alt_text": "UCC IP Office Building",
                        "caption": "Main Office Building",
                        "offset_x": 50,
                        "offset_y": 50
                    },
                    {
                        "url": image,
                        "alt_text": "Research Lab",
                        "caption": "State-of-the-art Research Facilities",
                        "offset_x": 50,
                        "offset_y": 50
                    },
                    {
                        "url": image,
                        "alt_text": "Team Meeting",
                        "caption": "Expert Evaluation Team",
                        "offset_x": 50,
                        "offset_y": 50
                    }
                ],
                "columns": 3
            }),
        ),
        (
            SectionType::Cta,
            json!({
                "heading": "Ready to Protect Your Innovation?",
                "description": "Join hundreds of faculty members and students who have already secured their intellectual property through our platform.",
                "button_text": "Start Your IP Journey",
                "button_link": "/register",
                "background_color": "bg-blue-600"
            }),
        ),
    ];

    let mut sections = Vec::with_capacity(bodies.len());
    for (index, (section_type, content)) in bodies.into_iter().enumerate() {
        registry::validate(section_type, &content)?;
        sections.push(SectionDraft {
            section_type,
            order_index: index as i64,
            content,
        });
    }

    Ok((page, sections))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_ORDER: [SectionType; 8] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Steps,
        SectionType::Categories,
        SectionType::TextSection,
        SectionType::Showcase,
        SectionType::Gallery,
        SectionType::Cta,
    ];

    #[test]
    fn builds_eight_sections_in_fixed_order() {
        let (page, sections) = build_demo_page("demo", None).unwrap();

        assert_eq!(page.slug, "demo");
        assert!(page.is_published);
        assert_eq!(sections.len(), 8);
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.order_index, i as i64);
            assert_eq!(section.section_type, EXPECTED_ORDER[i]);
        }
    }

    #[test]
    fn missing_image_yields_explicit_null() {
        let (_, sections) = build_demo_page("demo", None).unwrap();
        let hero = &sections[0];
        assert!(hero.content["background_image"].is_null());
    }

    #[test]
    fn image_url_lands_in_every_image_field() {
        let url = "https://cdn.example.com/cms-images/demo/pic.jpg";
        let (_, sections) = build_demo_page("demo", Some(url)).unwrap();

        assert_eq!(sections[0].content["background_image"], url);
        for item in sections[5].content["items"].as_array().unwrap() {
            assert_eq!(item["image_url"], url);
        }
        for img in sections[6].content["images"].as_array().unwrap() {
            assert_eq!(img["url"], url);
        }
    }

    #[test]
    fn output_is_deterministic() {
        let a = build_demo_page("demo", Some("https://x/y.jpg")).unwrap();
        let b = build_demo_page("demo", Some("https://x/y.jpg")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_draft_passes_the_registry() {
        let (_, sections) = build_demo_page("demo", None).unwrap();
        for section in &sections {
            crate::registry::validate(section.section_type, &section.content).unwrap();
        }
    }
}
