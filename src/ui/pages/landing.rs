//! Landing page
//!
//! Single scrolling page: navigation, hero, showcase video, attendance map,
//! system diagram, video gallery, blog, pricing and footer. Section entry
//! animations are CSS transitions toggled by a small IntersectionObserver
//! script, so they also run before hydration finishes.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};

use crate::core::content::{SITE_DESCRIPTION, SITE_URL, structured_data};
use crate::core::video::IFRAME_API_SRC;
use crate::ui::attendance_map::AttendanceMapSection;
use crate::ui::blog::BlogSection;
use crate::ui::carousel::VideoCarousel;
use crate::ui::footer::Footer;
use crate::ui::hero::HeroSection;
use crate::ui::navbar::Navbar;
use crate::ui::pricing::PricingSection;
use crate::ui::system_diagram::SystemDiagram;
use crate::ui::video_section::VideoSection;

const PAGE_TITLE: &str = "TekGeo - Geolocation Attendance Tracking";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen overflow-x-hidden bg-gradient-to-r from-gray-900 via-black to-blue-950 text-white">
            <Navbar />
            <main>
                <HeroSection />
                <VideoSection />
                <AttendanceMapSection />
                <SystemDiagram />
                <VideoCarousel />
                <BlogSection />
                <PricingSection />
            </main>
            <Footer />
        </div>

        <ScrollAnimationScript />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content="attendance tracking, geolocation, remote employees, workforce management, geofencing, Bangladesh" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=SITE_DESCRIPTION />

        <Link rel="canonical" href=SITE_URL />

        // Player API for the embedded videos
        <Script src=IFRAME_API_SRC />

        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            /* Scroll entry */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .glass-card {
                background: rgba(255, 255, 255, 0.05);
                backdrop-filter: blur(12px);
                border: 1px solid rgba(255, 255, 255, 0.1);
            }
            .text-gradient-blue {
                background: linear-gradient(90deg, #60a5fa, #2563eb);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            /* Hero */
            .hero-clip { clip-path: polygon(0 0, 100% 0, 100% 92%, 50% 100%, 0 92%); }
            .hero-grid-bg {
                background-image:
                    linear-gradient(rgba(37, 99, 235, 0.12) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(37, 99, 235, 0.12) 1px, transparent 1px);
                background-size: 40px 40px;
                transition: background-position 0.2s ease-out;
            }
            .hero-gradient {
                background: radial-gradient(circle at center, rgba(2, 8, 23, 0) 0%, #020817 75%);
            }
            @keyframes hero-fade-in {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .hero-fade-in {
                opacity: 0;
                animation: hero-fade-in 0.8s ease-out forwards;
            }
            @keyframes hero-float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-20px); }
            }
            .hero-float { animation: hero-float 6s ease-in-out infinite; }

            /* Navigation */
            @keyframes nav-dropdown-slide {
                from { opacity: 0; transform: translateX(var(--nav-enter, 0px)); }
                to { opacity: 1; transform: translateX(0); }
            }
            .nav-dropdown-slide { animation: nav-dropdown-slide 0.25s ease-out; }
            @keyframes nav-dropdown-in {
                from { opacity: 0; transform: rotateX(-15deg); }
                to { opacity: 1; transform: rotateX(0); }
            }
            .nav-dropdown { animation: nav-dropdown-in 0.25s ease-out; transform-origin: top; }
            @keyframes mobile-menu-in {
                from { transform: translateX(100%); }
                to { transform: translateX(0); }
            }
            .mobile-menu { animation: mobile-menu-in 0.3s ease-out; }

            /* Live feed */
            @keyframes feed-enter {
                from { opacity: 0; transform: translateY(-10px) scale(0.95); }
                to { opacity: 1; transform: translateY(0) scale(1); }
            }
            .feed-row { animation: feed-enter 0.4s ease-out; }

            /* Logo: outline draw, fill, shine, text; 14s cycle */
            @keyframes tekgeo-logo-outline {
                0% { stroke-dashoffset: 600; fill: transparent; }
                6% { fill: transparent; }
                11% { fill: #2563eb; }
                14%, 100% { stroke-dashoffset: 0; fill: #2563eb; }
            }
            .tekgeo-logo-outline {
                stroke-dasharray: 600;
                animation: tekgeo-logo-outline 14s ease-out infinite;
            }
            @keyframes tekgeo-logo-shine {
                0%, 7% { stroke-dashoffset: 300; opacity: 1; }
                14% { stroke-dashoffset: 0; opacity: 1; }
                18%, 100% { stroke-dashoffset: 0; opacity: 0; }
            }
            .tekgeo-logo-shine {
                stroke-dasharray: 300;
                animation: tekgeo-logo-shine 14s ease-out infinite;
            }
            @keyframes tekgeo-logo-text {
                0%, 11% { opacity: 0; transform: translateX(-10px); }
                18%, 100% { opacity: 1; transform: translateX(0); }
            }
            .tekgeo-logo-text {
                display: inline-block;
                animation: tekgeo-logo-text 14s ease-out infinite;
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-scroll-animate, .hero-fade-in { opacity: 1; transform: none; animation: none; transition: none; }
                .hero-float, .feed-row, .nav-dropdown, .nav-dropdown-slide, .mobile-menu { animation: none; }
            }
            "#
        </style>
    }
}

/// Adds `visible` to `.landing-scroll-animate` elements as they scroll in
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;
    use leptos_meta::provide_meta_context;

    fn render_landing() -> String {
        render_to_html(|| {
            provide_meta_context();
            view! { <LandingPage /> }
        })
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let html = render_landing();
        let markers = [
            "Next Generation Employee Tracking",
            "See TekGeo in Action",
            r#"id="maps-integration""#,
            "TekGeo Attendance System",
            r#"id="business-solutions""#,
            "Latest from Our Blog",
            r#"id="pricing""#,
            r#"id="contact""#,
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_every_nav_target_exists() {
        let html = render_landing();
        for id in ["features", "maps-integration", "business-solutions", "documentation", "pricing", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "{id}");
        }
    }

    #[test]
    fn test_structured_data_and_scroll_script_inlined() {
        let html = render_landing();
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("landing-scroll-animate"));
        assert!(html.contains("IntersectionObserver"));
    }
}
