//! Static page copy: blog teasers, pricing, footer links and headline stats

use serde::Serialize;

pub const SITE_URL: &str = "https://tekgeo.teksoi.com/";
pub const SITE_NAME: &str = "TekGeo";
pub const SITE_DESCRIPTION: &str =
    "TekGeo's most advanced remote employee monitoring system. Geolocation attendance tracking for distributed teams.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "Revolutionizing Geofencing with AI Integration",
        excerpt: "Discover how artificial intelligence is transforming traditional geofencing into smart, adaptive boundary systems.",
        category: "Technology",
        read_time: "5 min",
        image: "https://images.unsplash.com/photo-1551721434-8b94ddff0e6d?auto=format&fit=crop&q=80&w=800",
    },
    BlogPost {
        id: 2,
        title: "Real-time Location Tracking Breakthroughs",
        excerpt: "Exploring the latest advancements in real-time location tracking and their impact on geofencing accuracy.",
        category: "Innovation",
        read_time: "4 min",
        image: "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?auto=format&fit=crop&q=80&w=800",
    },
    BlogPost {
        id: 3,
        title: "Privacy-First Geofencing Solutions",
        excerpt: "How modern geofencing technology is addressing privacy concerns while maintaining effectiveness.",
        category: "Security",
        read_time: "6 min",
        image: "https://images.unsplash.com/photo-1633265486064-086b219458ec?auto=format&fit=crop&q=80&w=800",
    },
];

/// Price label of tiers sold on request
pub const CUSTOM_PRICE: &str = "Custom";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
    pub gradient: &'static str,
}

impl PricingTier {
    /// Billing period suffix; custom quotes have none
    pub fn period(&self) -> Option<&'static str> {
        (self.price != CUSTOM_PRICE).then_some("/month")
    }

    /// Numeric monthly price in USD, if the tier has one
    pub fn amount(&self) -> Option<u32> {
        self.price.strip_prefix('$')?.parse().ok()
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "$99",
        description: "Perfect for small teams just getting started with remote work.",
        features: &[
            "Up to 25 employees",
            "Basic geolocation tracking",
            "Standard reports",
            "Email support",
            "1 office location",
        ],
        cta: "Start Free Trial",
        popular: false,
        gradient: "from-blue-500/20 to-cyan-500/20 border-blue-500/30",
    },
    PricingTier {
        name: "Professional",
        price: "$249",
        description: "Ideal for growing companies with distributed teams.",
        features: &[
            "Up to 100 employees",
            "Advanced geolocation tracking",
            "Custom reports & analytics",
            "Priority support",
            "5 office locations",
            "Mobile app access",
        ],
        cta: "Start Free Trial",
        popular: true,
        gradient: "from-blue-600/30 to-indigo-600/30 border-blue-500/40",
    },
    PricingTier {
        name: "Enterprise",
        price: CUSTOM_PRICE,
        description: "Tailored solutions for large organizations with complex needs.",
        features: &[
            "Unlimited employees",
            "Advanced geolocation with AI",
            "Custom integrations",
            "Dedicated account manager",
            "Unlimited office locations",
            "Advanced security features",
            "API access",
        ],
        cta: "Contact Sales",
        popular: false,
        gradient: "from-indigo-500/20 to-purple-500/20 border-indigo-500/30",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Product",
        links: &["Features", "Integrations", "Pricing", "Demo", "API"],
    },
    FooterColumn {
        title: "Resources",
        links: &["Documentation", "Guides", "Case Studies", "Blog", "Support"],
    },
    FooterColumn {
        title: "Company",
        links: &["About Us", "Careers", "Press", "Partners", "Contact"],
    },
];

pub const CONTACT_ADDRESS: &str = "House-56, Road-16, sector-14 Uttara Dhaka 1230,Bangladesh";
pub const CONTACT_EMAIL: &str = "info@teksoi.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const COPYRIGHT: &str = "© 2025 TekGeo. All rights reserved.";

/// Social profile buttons: icon name and accessible label
pub const SOCIAL_LINKS: [(&str, &str); 5] = [
    ("facebook", "Facebook"),
    ("twitter", "Twitter"),
    ("instagram", "Instagram"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
];

/// Big number with a caption
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
    /// Change badge, e.g. "+12%"
    pub trend: Option<&'static str>,
    pub icon: &'static str,
}

pub fn diagram_stats() -> [Stat; 4] {
    [
        Stat {
            value: "98%".into(),
            label: "Attendance Accuracy",
            trend: None,
            icon: "check",
        },
        Stat {
            value: "50+".into(),
            label: "Companies",
            trend: None,
            icon: "building",
        },
        Stat {
            value: "1000+".into(),
            label: "Employees Tracked",
            trend: None,
            icon: "users",
        },
        Stat {
            value: "30%".into(),
            label: "Time Saved",
            trend: None,
            icon: "clock",
        },
    ]
}

/// Summary cards under the attendance map
pub fn map_summary_stats() -> [Stat; 4] {
    use super::attendance::{average_attendance, format_thousands, total_headcount};

    [
        Stat {
            value: format_thousands(total_headcount()),
            label: "Total Employees",
            trend: Some("+12%"),
            icon: "users",
        },
        Stat {
            value: format!("{:.1}%", average_attendance()),
            label: "Avg. Attendance",
            trend: Some("+3.2%"),
            icon: "check",
        },
        Stat {
            value: "32".into(),
            label: "Office Locations",
            trend: Some("+2"),
            icon: "building",
        },
        Stat {
            value: "425".into(),
            label: "Remote Workers",
            trend: Some("+45"),
            icon: "laptop",
        },
    ]
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SoftwareApplication {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    application_category: &'static str,
    operating_system: &'static str,
    description: &'static str,
    url: &'static str,
    author: Organization,
    offers: Vec<Offer>,
}

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_currency: Option<&'static str>,
    description: &'static str,
}

/// schema.org JSON-LD for the landing page, offers taken from the pricing table
pub fn structured_data() -> String {
    let data = SoftwareApplication {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: SITE_NAME,
        application_category: "BusinessApplication",
        operating_system: "Web, Android, iOS",
        description: SITE_DESCRIPTION,
        url: SITE_URL,
        author: Organization {
            kind: "Organization",
            name: "Teksoi",
        },
        offers: PRICING_TIERS
            .iter()
            .map(|tier| Offer {
                kind: "Offer",
                name: tier.name,
                price: tier.amount().map(|a| a.to_string()),
                price_currency: tier.amount().map(|_| "USD"),
                description: tier.description,
            })
            .collect(),
    };
    // Serializing plain structs of strings cannot fail
    serde_json::to_string(&data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_blog_posts() {
        assert_eq!(BLOG_POSTS.len(), 3);
        assert!(BLOG_POSTS.iter().all(|p| p.image.starts_with("https://")));
    }

    #[test]
    fn test_pricing_period_suffix() {
        let periods: Vec<Option<&str>> = PRICING_TIERS.iter().map(|t| t.period()).collect();
        assert_eq!(periods, vec![Some("/month"), Some("/month"), None]);
    }

    #[test]
    fn test_single_popular_tier() {
        let popular: Vec<&str> = PRICING_TIERS
            .iter()
            .filter(|t| t.popular)
            .map(|t| t.name)
            .collect();
        assert_eq!(popular, vec!["Professional"]);
    }

    #[test]
    fn test_tier_amounts() {
        assert_eq!(PRICING_TIERS[0].amount(), Some(99));
        assert_eq!(PRICING_TIERS[1].amount(), Some(249));
        assert_eq!(PRICING_TIERS[2].amount(), None);
    }

    #[test]
    fn test_map_summary_values() {
        let stats = map_summary_stats();
        assert_eq!(stats[0].value, "1,810");
        assert_eq!(stats[1].value, "84.5%");
        assert_eq!(stats[2].value, "32");
        assert_eq!(stats[3].trend, Some("+45"));
    }

    #[test]
    fn test_structured_data() {
        let json: serde_json::Value = serde_json::from_str(&structured_data()).unwrap();
        assert_eq!(json["@type"], "SoftwareApplication");
        assert_eq!(json["name"], "TekGeo");
        let offers = json["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0]["price"], "99");
        assert_eq!(offers[0]["priceCurrency"], "USD");
        assert!(offers[2].get("price").is_none());
    }
}
