use leptos::prelude::*;

use crate::core::content::{PRICING_TIERS, PricingTier};
use crate::core::motion::stagger_delay;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="relative overflow-hidden bg-black py-24 md:py-32">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_bottom_right,_#1a1a3a,_transparent_50%)] opacity-40"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_left,_#0f172a,_transparent_50%)] opacity-30"></div>

            <div class="relative z-10 mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mx-auto mb-16 max-w-3xl text-center landing-scroll-animate">
                    <h2 class="mb-6 bg-gradient-to-r from-white via-blue-300 to-blue-600 bg-clip-text text-4xl tracking-tight text-transparent sm:text-5xl">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="mx-auto max-w-2xl text-lg text-blue-200/80">
                        "Choose the plan that fits your team's needs. All plans include a 14-day free trial with no credit card required."
                    </p>
                </div>

                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {PRICING_TIERS
                        .into_iter()
                        .enumerate()
                        .map(|(index, tier)| view! { <PricingCard tier=tier index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: PricingTier, index: usize) -> impl IntoView {
    let shadow = if tier.popular {
        "shadow-[0_0_30px_-12px_rgba(59,130,246,0.5)]"
    } else {
        ""
    };
    let button_class = if tier.popular {
        "w-full rounded-md py-2.5 text-sm font-medium bg-gradient-to-r from-blue-600 to-indigo-600 text-white hover:from-blue-700 hover:to-indigo-700"
    } else {
        "w-full rounded-md py-2.5 text-sm font-medium bg-blue-950/50 text-white hover:bg-blue-900/50"
    };

    view! {
        <div
            class=format!(
                "relative flex h-full flex-col overflow-hidden rounded-xl border bg-gradient-to-br p-6 backdrop-blur-sm landing-scroll-animate {} {shadow}",
                tier.gradient,
            )
            style=format!("transition-delay: {}s", stagger_delay(index, 0.1))
        >
            {tier
                .popular
                .then(|| {
                    view! {
                        <div class="absolute right-0 top-0">
                            <div class="h-20 w-20 translate-x-1/2 -translate-y-1/2 rotate-45 bg-gradient-to-r from-blue-600 to-indigo-600"></div>
                            <span class="absolute right-0 top-0 mr-2 mt-2 text-xs font-medium text-white">"Popular"</span>
                        </div>
                    }
                })}

            <h3 class="text-xl font-semibold text-white">{tier.name}</h3>
            <div class="mt-4 flex items-baseline text-white">
                <span class="text-4xl font-extrabold tracking-tight">{tier.price}</span>
                {tier.period().map(|period| view! { <span class="ml-1 text-xl font-semibold">{period}</span> })}
            </div>
            <p class="mt-2 text-blue-200/70">{tier.description}</p>

            <ul class="mt-6 mb-8 flex-1 space-y-3">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-start">
                                <Icon name=icons::CHECK class="h-5 w-5 shrink-0 text-blue-500" />
                                <span class="ml-3 text-sm text-blue-100/90">{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <a href="#contact" class=format!("block text-center {button_class}")>
                {tier.cta}
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_pricing_lists_every_tier_and_feature() {
        let html = render_to_html(|| view! { <PricingSection /> });
        for tier in PRICING_TIERS {
            assert!(html.contains(tier.name));
            for feature in tier.features {
                assert!(html.contains(feature), "{feature}");
            }
        }
    }

    #[test]
    fn test_only_popular_tier_has_ribbon() {
        let html = render_to_html(|| view! { <PricingSection /> });
        assert_eq!(html.matches(">Popular<").count(), 1);
    }

    #[test]
    fn test_custom_tier_has_no_period() {
        let enterprise = PRICING_TIERS[2];
        let html = render_to_html(|| view! { <PricingCard tier=enterprise index=2 /> });
        assert!(html.contains("Custom"));
        assert!(!html.contains("/month"));
        assert!(html.contains("Contact Sales"));
    }
}
