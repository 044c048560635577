//! Everything the site says about itself, apart from the product list.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::category::CategoryId;

/// A product highlighted on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedProduct {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price: &'static str,
}

/// A headline number on the about page, e.g. "20+ Years of Experience".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// The kind of contact card, which decides its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Address,
    Phone,
    Email,
    Hours,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub kind: ContactKind,
    pub title: &'static str,
    pub details: Vec<&'static str>,
}

/// Where a footer link goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    About,
    Contact,
    /// The catalog page with a category already selected.
    Products(CategoryId),
    /// Another site, opened in a new tab.
    External(&'static str),
    /// A path the site links to but has no page for.
    Unrouted(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub name: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLinks {
    pub products: Vec<FooterLink>,
    pub company: Vec<FooterLink>,
    pub social: Vec<FooterLink>,
}

/// The whole site's static content, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub catalog: Catalog,
    pub featured: Vec<FeaturedProduct>,
    pub selling_points: Vec<&'static str>,
    /// The badge on the "why choose us" image.
    pub experience: Stat,
    pub stats: Vec<Stat>,
    pub values: Vec<Value>,
    pub team: Vec<TeamMember>,
    pub contact_cards: Vec<ContactCard>,
    pub contact_notes: Vec<&'static str>,
    pub footer: FooterLinks,
}

impl SiteContent {
    pub fn spice_delights() -> Self {
        Self {
            brand: "Spice Delights",
            tagline: "Bringing the finest spices from around the world to your kitchen.",
            catalog: Catalog::spice_delights(),
            featured: vec![
                FeaturedProduct {
                    id: 1,
                    name: "Premium Saffron",
                    description: "Hand-picked premium quality saffron threads",
                    image: "https://images.pexels.com/photos/4198843/pexels-photo-4198843.jpeg?auto=compress&cs=tinysrgb&w=800",
                    price: "$15.99",
                },
                FeaturedProduct {
                    id: 2,
                    name: "Organic Turmeric",
                    description: "Pure organic ground turmeric root",
                    image: "https://images.pexels.com/photos/4198019/pexels-photo-4198019.jpeg?auto=compress&cs=tinysrgb&w=800",
                    price: "$9.99",
                },
                FeaturedProduct {
                    id: 3,
                    name: "Cardamom Pods",
                    description: "Fresh green cardamom pods",
                    image: "https://images.pexels.com/photos/4198023/pexels-photo-4198023.jpeg?auto=compress&cs=tinysrgb&w=800",
                    price: "$12.99",
                },
            ],
            selling_points: vec![
                "Premium Quality Guaranteed",
                "Ethically Sourced",
                "Fresh & Authentic",
                "Expert Selection",
            ],
            experience: Stat {
                number: "20+",
                label: "Years of Excellence",
            },
            stats: vec![
                Stat { number: "20+", label: "Years of Experience" },
                Stat { number: "50+", label: "Premium Products" },
                Stat { number: "100K+", label: "Happy Customers" },
                Stat { number: "30+", label: "Countries Served" },
            ],
            values: vec![
                Value {
                    icon: "🌱",
                    title: "Sustainability",
                    description: "We're committed to sustainable farming practices and ethical sourcing.",
                },
                Value {
                    icon: "✨",
                    title: "Quality",
                    description: "Every spice undergoes rigorous quality checks to ensure excellence.",
                },
                Value {
                    icon: "🤝",
                    title: "Community",
                    description: "We support local farmers and communities in spice-growing regions.",
                },
            ],
            team: vec![
                TeamMember {
                    name: "Sarah Johnson",
                    role: "Master Spice Blender",
                    image: "https://images.pexels.com/photos/3771807/pexels-photo-3771807.jpeg",
                    description: "With over 15 years of experience in spice blending, Sarah ensures our blends are perfectly balanced.",
                },
                TeamMember {
                    name: "Michael Chen",
                    role: "Quality Control Expert",
                    image: "https://images.pexels.com/photos/3785104/pexels-photo-3785104.jpeg",
                    description: "Michael's expertise ensures that only the finest spices make it to your kitchen.",
                },
                TeamMember {
                    name: "Priya Patel",
                    role: "Sourcing Specialist",
                    image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg",
                    description: "Priya travels the world to find the most exceptional spices from trusted farmers.",
                },
            ],
            contact_cards: vec![
                ContactCard {
                    kind: ContactKind::Address,
                    title: "Visit Us",
                    details: vec!["123 Spice Market Street", "Flavor District", "New York, NY 10001"],
                },
                ContactCard {
                    kind: ContactKind::Phone,
                    title: "Call Us",
                    details: vec!["+1 (555) 123-4567", "+1 (555) 987-6543"],
                },
                ContactCard {
                    kind: ContactKind::Email,
                    title: "Email Us",
                    details: vec!["info@spicedelights.com", "support@spicedelights.com"],
                },
                ContactCard {
                    kind: ContactKind::Hours,
                    title: "Business Hours",
                    details: vec!["Monday - Friday: 9:00 AM - 6:00 PM", "Saturday: 10:00 AM - 4:00 PM"],
                },
            ],
            contact_notes: vec![
                "For wholesale inquiries, please contact our business development team directly.",
                "We offer worldwide shipping to most countries.",
                "Customer support is available during business hours.",
            ],
            footer: FooterLinks {
                products: vec![
                    FooterLink { name: "Organic Spices", target: LinkTarget::Products(CategoryId::Organic) },
                    FooterLink { name: "Spice Blends", target: LinkTarget::Products(CategoryId::Blends) },
                    FooterLink { name: "Gift Sets", target: LinkTarget::Unrouted("/products/gifts") },
                    FooterLink { name: "Bulk Orders", target: LinkTarget::Unrouted("/products/bulk") },
                ],
                company: vec![
                    FooterLink { name: "About Us", target: LinkTarget::About },
                    FooterLink { name: "Contact", target: LinkTarget::Contact },
                    FooterLink { name: "Blog", target: LinkTarget::Unrouted("/blog") },
                    FooterLink { name: "Careers", target: LinkTarget::Unrouted("/careers") },
                ],
                social: vec![
                    FooterLink { name: "Facebook", target: LinkTarget::External("https://facebook.com") },
                    FooterLink { name: "Instagram", target: LinkTarget::External("https://instagram.com") },
                    FooterLink { name: "Twitter", target: LinkTarget::External("https://twitter.com") },
                    FooterLink { name: "Pinterest", target: LinkTarget::External("https://pinterest.com") },
                ],
            },
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::spice_delights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_page_counts() {
        let content = SiteContent::spice_delights();
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.values.len(), 3);
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.team[2].name, "Priya Patel");
    }

    #[test]
    fn home_page_features_three_products() {
        let content = SiteContent::spice_delights();
        let names: Vec<_> = content.featured.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Premium Saffron", "Organic Turmeric", "Cardamom Pods"]);
        assert_eq!(content.selling_points.len(), 4);
    }

    #[test]
    fn contact_cards_carry_their_details() {
        let content = SiteContent::spice_delights();
        let hours = content
            .contact_cards
            .iter()
            .find(|card| card.kind == ContactKind::Hours)
            .unwrap();
        assert_eq!(hours.details.len(), 2);
        assert_eq!(content.contact_cards[0].details[2], "New York, NY 10001");
    }

    #[test]
    fn footer_product_links_preset_a_category() {
        let footer = SiteContent::spice_delights().footer;
        assert_eq!(footer.products[0].target, LinkTarget::Products(CategoryId::Organic));
        assert_eq!(footer.products[1].target, LinkTarget::Products(CategoryId::Blends));
        assert!(footer
            .social
            .iter()
            .all(|link| matches!(link.target, LinkTarget::External(url) if url.starts_with("https://"))));
    }

    #[test]
    fn catalog_is_the_sample_catalog() {
        assert_eq!(SiteContent::default().catalog.products().len(), 6);
    }
}
