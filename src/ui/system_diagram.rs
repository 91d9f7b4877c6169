use leptos::prelude::*;

use crate::core::beam::beam_path;
use crate::core::content::diagram_stats;
use crate::core::diagram::{BEAMS, DiagramLayout, DiagramNode, LabelPosition, VIEW_HEIGHT, VIEW_WIDTH};
use crate::ui::beam::AnimatedBeam;
use crate::ui::icon::Icon;

/// Attendance sources flowing into TekGeo and on to the dashboard.
///
/// Nodes and beams share the diagram viewBox; the canvas keeps its aspect
/// ratio so percent-positioned nodes stay on the beam ends at any width.
#[component]
pub fn SystemDiagram() -> impl IntoView {
    let layout = DiagramLayout::default();

    let beams = BEAMS
        .into_iter()
        .enumerate()
        .map(|(index, beam)| {
            let from = layout.anchor(beam.from, VIEW_WIDTH, VIEW_HEIGHT);
            let to = layout.anchor(beam.to, VIEW_WIDTH, VIEW_HEIGHT);
            view! {
                <AnimatedBeam
                    id=format!("diagram-beam-{index}")
                    path=beam_path(from, to, 0.0)
                    gradient=Signal::stored(beam.gradient)
                    timing=Signal::stored(beam.timing)
                    width=beam.width
                />
            }
        })
        .collect_view();

    view! {
        <section id="features" class="relative overflow-hidden bg-black px-4 py-16 md:px-8">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_right,_#1a1a3a,_transparent_50%)] opacity-40"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_bottom_left,_#0f172a,_transparent_50%)] opacity-30"></div>

            <div class="relative z-10 mx-auto max-w-7xl">
                <div class="max-w-full mx-auto landing-scroll-animate">
                    <h2 class="mb-6 bg-gradient-to-r from-white via-blue-300 to-blue-600 bg-clip-text text-4xl tracking-tight text-transparent sm:text-5xl">
                        "TekGeo Attendance System"
                    </h2>
                    <p class="mb-2 max-w-2xl text-lg text-blue-200/80">
                        "Revolutionize how you track attendance for remote and distributed teams with geolocation technology"
                    </p>
                </div>

                <div class="relative mx-auto mt-10 max-w-5xl">
                    <div class="relative mx-auto w-full aspect-[2/1] overflow-hidden rounded-xl border-2 border-blue-400 bg-black/40 backdrop-blur-sm">
                        <svg
                            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                            preserveAspectRatio="none"
                            class="absolute inset-0 h-full w-full pointer-events-none"
                            fill="none"
                        >
                            {beams}
                        </svg>
                        {DiagramNode::ALL
                            .into_iter()
                            .map(|node| view! { <DiagramNodeView node=node layout=layout /> })
                            .collect_view()}
                    </div>

                    <div class="mt-16 grid grid-cols-2 gap-8 text-center md:grid-cols-4">
                        {diagram_stats()
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="flex flex-col items-center rounded-lg border border-blue-900/30 bg-blue-950/20 p-4 backdrop-blur-sm landing-scroll-animate">
                                        <div class="mb-2 bg-gradient-to-r from-white to-blue-300 bg-clip-text text-3xl font-bold text-transparent">
                                            {stat.value}
                                        </div>
                                        <div class="text-sm text-blue-200/70">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DiagramNodeView(node: DiagramNode, layout: DiagramLayout) -> impl IntoView {
    let (left, top) = layout.anchor_percent(node, VIEW_WIDTH, VIEW_HEIGHT);
    let size = node.size();
    let label_class = match node.label_position() {
        LabelPosition::Left => "text-left",
        LabelPosition::Center => "text-center",
        LabelPosition::Right => "text-right",
    };
    let icon_class = if node == DiagramNode::AttendanceSystem { "h-10 w-10" } else { "h-6 w-6" };

    view! {
        <div
            class="absolute z-10 -translate-x-1/2 flex flex-col items-center gap-2"
            style=format!("left: {left}%; top: calc({top}% - {}px);", size / 2.0)
        >
            <div
                class=format!(
                    "flex items-center justify-center rounded-full border border-white/10 bg-gradient-to-br p-3 text-white shadow-[0_0_20px_-5px_rgba(120,120,255,0.5)] {}",
                    node.gradient(),
                )
                style:width=format!("{size}px")
                style:height=format!("{size}px")
            >
                <Icon name=node.icon() class=icon_class />
            </div>
            <span class=format!("whitespace-nowrap text-xs font-medium text-white/70 drop-shadow-sm {label_class}")>
                {node.label()}
            </span>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_diagram_renders_every_node_and_beam() {
        let html = render_to_html(|| view! { <SystemDiagram /> });
        for node in DiagramNode::ALL {
            assert!(html.contains(node.label()), "{}", node.label());
        }
        for index in 0..BEAMS.len() {
            assert!(html.contains(&format!("url(#diagram-beam-{index})")));
        }
        assert!(html.contains(r#"viewBox="0 0 1000 500""#));
    }

    #[test]
    fn test_diagram_headline_stats() {
        let html = render_to_html(|| view! { <SystemDiagram /> });
        for stat in diagram_stats() {
            assert!(html.contains(&stat.value));
            assert!(html.contains(stat.label));
        }
    }

    #[test]
    fn test_hub_node_is_centred() {
        let html = render_to_html(|| {
            view! {
                <DiagramNodeView node=DiagramNode::AttendanceSystem layout=DiagramLayout::default() />
            }
        });
        assert!(html.contains("left: 50%; top: calc(50% - 40px);"));
        assert!(html.contains("text-center"));
    }
}
