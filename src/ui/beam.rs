//! Animated beam drawn inside a parent `<svg>`
//!
//! A faint static path with a gradient-stroked copy on top. The gradient's
//! `x1`/`x2` are animated with SMIL so the highlight travels along the path
//! without any script running per frame.

use leptos::prelude::*;

use crate::core::beam::{BeamGradient, BeamTiming};
use crate::core::diagram::{PATH_COLOR, PATH_OPACITY};

/// Ease-out curve of one sweep
const SWEEP_SPLINE: &str = "0.16 1 0.3 1";

#[component]
pub fn AnimatedBeam(
    /// Unique id of the gradient definition
    id: String,
    /// SVG path data, see `core::beam::beam_path`
    path: String,
    #[prop(into)] gradient: Signal<BeamGradient>,
    #[prop(into)] timing: Signal<BeamTiming>,
    #[prop(default = 2.0)] width: f64,
    /// Hidden beams keep their node so the animation clock is not reset
    #[prop(into, default = Signal::stored(true))]
    visible: Signal<bool>,
) -> impl IntoView {
    let stroke = format!("url(#{id})");
    let begin = move || format!("{}s", timing.get().delay_s);
    let dur = move || format!("{}s", timing.get().duration_s);
    let x1 = move || gradient.get().keyframes().0;
    let x2 = move || gradient.get().keyframes().1;
    let start = move || gradient.get().start;
    let stop = move || gradient.get().stop;

    view! {
        <g
            class="transition-opacity duration-300"
            style:opacity=move || if visible.get() { "1" } else { "0" }
        >
            <path
                d=path.clone()
                stroke=PATH_COLOR
                stroke-width=width
                stroke-opacity=PATH_OPACITY
                stroke-linecap="round"
                fill="none"
            />
            <path d=path stroke=stroke stroke-width=width stroke-linecap="round" fill="none" />
            <defs>
                <linearGradient id=id gradientUnits="userSpaceOnUse" x1="0%" x2="0%" y1="0%" y2="0%">
                    <animate
                        attributeName="x1"
                        values=x1
                        keyTimes="0;1"
                        calcMode="spline"
                        keySplines=SWEEP_SPLINE
                        begin=begin
                        dur=dur
                        repeatCount="indefinite"
                    />
                    <animate
                        attributeName="x2"
                        values=x2
                        keyTimes="0;1"
                        calcMode="spline"
                        keySplines=SWEEP_SPLINE
                        begin=begin
                        dur=dur
                        repeatCount="indefinite"
                    />
                    <stop stop-color=start stop-opacity="0" />
                    <stop stop-color=start />
                    <stop offset="32.5%" stop-color=stop />
                    <stop offset="100%" stop-color=stop stop-opacity="0" />
                </linearGradient>
            </defs>
        </g>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::beam::{Point, beam_path};
    use crate::ui::render_to_html;

    #[test]
    fn test_beam_renders_gradient_and_timing() {
        let html = render_to_html(|| {
            view! {
                <svg>
                    <AnimatedBeam
                        id="beam-test".to_string()
                        path=beam_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 0.0)
                        gradient=BeamGradient::new("#38bdf8", "#818cf8")
                        timing=BeamTiming::with_delay(1.5)
                    />
                </svg>
            }
        });

        assert!(html.contains("url(#beam-test)"));
        assert!(html.contains("M 0,0 Q 50,0 100,0"));
        assert!(html.contains("1.5s"));
        assert!(html.contains("10%;110%"));
    }

    #[test]
    fn test_reversed_beam_uses_reverse_keyframes() {
        let html = render_to_html(|| {
            view! {
                <svg>
                    <AnimatedBeam
                        id="beam-rev".to_string()
                        path="M 0,0 Q 5,0 10,0".to_string()
                        gradient=BeamGradient::new("#8b5cf6", "#f59e0b").reversed()
                        timing=BeamTiming::default()
                    />
                </svg>
            }
        });

        assert!(html.contains("90%;-10%"));
        assert!(html.contains("100%;0%"));
    }
}
