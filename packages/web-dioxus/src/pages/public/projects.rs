//! Projects page

use dioxus::prelude::*;

use crate::routes::Route;

struct Project {
    title: &'static str,
    region: &'static str,
    summary: &'static str,
    progress: u8,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Clean Water Initiative",
        region: "East Africa",
        summary: "Drilling wells and training local maintenance teams.",
        progress: 75,
    },
    Project {
        title: "Education for All",
        region: "South Asia",
        summary: "Building classrooms and funding teacher salaries.",
        progress: 60,
    },
    Project {
        title: "Mobile Health Clinics",
        region: "Central America",
        summary: "Bringing primary care to remote villages.",
        progress: 40,
    },
    Project {
        title: "Women's Enterprise Fund",
        region: "West Africa",
        summary: "Microloans and mentoring for women-led businesses.",
        progress: 85,
    },
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        div {
            section {
                class: "py-20 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
                div {
                    class: "container mx-auto px-4 max-w-4xl text-center space-y-6",
                    h1 { class: "text-4xl md:text-5xl font-bold", "Our Projects" }
                    p {
                        class: "text-xl text-gray-500",
                        "See where your support goes and how each project is progressing."
                    }
                }
            }

            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 grid md:grid-cols-2 gap-6 max-w-5xl",
                    for project in PROJECTS.iter() {
                        ProjectCard {
                            title: project.title,
                            region: project.region,
                            summary: project.summary,
                            progress: project.progress,
                        }
                    }
                }
            }

            section {
                class: "py-16 bg-gray-50 text-center",
                Link {
                    to: Route::Donate {},
                    class: "inline-block px-6 py-3 rounded-md text-white bg-emerald-600 hover:bg-emerald-700 font-medium",
                    "Support a Project"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProjectCardProps {
    title: &'static str,
    region: &'static str,
    summary: &'static str,
    progress: u8,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-gray-200 p-6 space-y-3 hover:shadow-lg transition-shadow",
            span {
                class: "inline-block px-2 py-0.5 rounded-full bg-amber-100 text-amber-800 text-xs",
                "{props.region}"
            }
            h3 { class: "text-xl font-semibold", "{props.title}" }
            p { class: "text-gray-500", "{props.summary}" }
            div {
                class: "h-2 rounded-full bg-gray-100",
                div {
                    class: "h-2 rounded-full bg-emerald-600",
                    style: "width: {props.progress}%",
                }
            }
            p { class: "text-xs text-gray-500", "{props.progress}% funded" }
        }
    }
}
