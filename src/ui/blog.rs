use leptos::prelude::*;

use crate::core::content::{BLOG_POSTS, BlogPost};
use crate::core::motion::stagger_delay;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn BlogSection() -> impl IntoView {
    view! {
        <section id="documentation" class="py-16 p-12">
            <h2 id="blog" class="text-4xl font-bold mb-16 text-center text-gradient-blue landing-scroll-animate">
                "Latest from Our Blog"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {BLOG_POSTS
                    .into_iter()
                    .enumerate()
                    .map(|(index, post)| view! { <BlogCard post=post index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BlogCard(post: BlogPost, index: usize) -> impl IntoView {
    view! {
        <article
            class="group rounded-xl overflow-hidden bg-blue-950/50 backdrop-blur-sm hover:border-2 hover:border-blue-400 transition-all duration-300 landing-scroll-animate"
            style=format!("transition-delay: {}s", stagger_delay(index, 0.1))
        >
            <div class="aspect-video overflow-hidden">
                <img
                    src=post.image
                    alt=post.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    loading="lazy"
                />
            </div>
            <div class="p-6">
                <div class="flex items-center gap-4 mb-4 text-sm text-blue-200/70">
                    <span class="flex items-center gap-1">
                        <Icon name=icons::TAG class="w-4 h-4" />
                        {post.category}
                    </span>
                    <span class="flex items-center gap-1">
                        <Icon name=icons::CLOCK class="w-4 h-4" />
                        {post.read_time}
                    </span>
                </div>
                <h3 class="text-xl font-semibold mb-2 text-blue-100 group-hover:text-blue-400 transition-colors">
                    {post.title}
                </h3>
                <p class="text-blue-200/70 mb-4">{post.excerpt}</p>
                <button class="flex items-center gap-2 text-blue-400 group-hover:text-blue-300 transition-colors">
                    "Read More"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                </button>
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_blog_lists_every_post() {
        let html = render_to_html(|| view! { <BlogSection /> });
        for post in BLOG_POSTS {
            assert!(html.contains(post.title));
            assert!(html.contains(post.category));
        }
        assert_eq!(html.matches("<article").count(), BLOG_POSTS.len());
    }
}
