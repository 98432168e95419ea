//! Membership page: benefits, application form and status

use dioxus::prelude::*;
use hopehands_core::forms::{
    ApplicationQueue, ApplicationRecord, ApplicationStatus, FormSubmission, MembershipApplication,
};
use hopehands_core::SiteConfig;

use crate::components::LoadingDots;
use crate::delay::simulate_latency;
use crate::state::{MembershipState, MembershipTab};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500";

const BENEFITS: [(&str, &str); 6] = [
    ("Make Direct Impact", "Your membership directly funds life-changing projects worldwide"),
    ("Global Community", "Connect with like-minded changemakers from around the world"),
    ("Official Certificate", "Receive a personalized membership certificate upon approval"),
    ("Member Chat", "Access to exclusive member-only group chat and discussions"),
    ("Project Updates", "Get exclusive updates on projects and impact reports"),
    ("Recognition", "Be recognized for your contributions to positive change"),
];

const REQUIREMENTS: [&str; 6] = [
    "Be at least 18 years old",
    "Provide valid contact information",
    "Upload a recent photograph",
    "Explain your motivation for joining",
    "Agree to our code of conduct",
    "Commit to our mission and values",
];

#[component]
pub fn Membership() -> Element {
    let mut tab = use_signal(MembershipTab::default);

    let tabs = MembershipTab::variants().iter().copied().map(|t| {
        let label = t.label();
        let class = if tab() == t {
            "flex-1 py-2 text-sm font-medium rounded-md bg-white shadow-sm text-emerald-700"
        } else {
            "flex-1 py-2 text-sm font-medium rounded-md text-gray-500 hover:text-gray-700"
        };
        rsx! {
            button {
                key: "{label}",
                r#type: "button",
                class: class,
                onclick: move |_| tab.set(t),
                "{label}"
            }
        }
    });

    rsx! {
        div {
            // Hero Section
            section {
                class: "py-20 bg-gradient-to-br from-emerald-50 via-white to-amber-50",
                div {
                    class: "container mx-auto px-4 max-w-4xl text-center space-y-6",
                    h1 {
                        class: "text-4xl md:text-6xl font-bold leading-tight",
                        "Become a "
                        span { class: "text-emerald-700", "HopeHands Member" }
                    }
                    p {
                        class: "text-xl text-gray-500 max-w-2xl mx-auto",
                        "Join our global community of changemakers and help us create lasting positive impact."
                    }
                }
            }

            section {
                class: "py-16",
                div {
                    class: "container mx-auto px-4 space-y-8",
                    div {
                        class: "flex max-w-md mx-auto bg-gray-100 rounded-lg p-1",
                        {tabs}
                    }

                    match tab() {
                        MembershipTab::Apply => rsx! {
                            ApplicationForm { on_submitted: move |_| tab.set(MembershipTab::Status) }
                        },
                        MembershipTab::Status => rsx! {
                            MemberStatus { on_apply: move |_| tab.set(MembershipTab::Apply) }
                        },
                        MembershipTab::Benefits => rsx! { Benefits {} },
                    }
                }
            }
        }
    }
}

#[component]
fn Benefits() -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto space-y-12",
            div {
                class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                for (title, description) in BENEFITS {
                    div {
                        class: "text-center rounded-lg border border-gray-200 p-6 space-y-2",
                        h3 { class: "text-lg font-semibold", "{title}" }
                        p { class: "text-gray-500 text-sm", "{description}" }
                    }
                }
            }

            div {
                class: "max-w-2xl mx-auto rounded-lg border border-gray-200 p-6",
                h3 { class: "text-center font-semibold mb-4", "Membership Requirements" }
                ul {
                    class: "space-y-3",
                    for requirement in REQUIREMENTS {
                        li { class: "flex items-start space-x-3", "\u{2713} {requirement}" }
                    }
                }
            }
        }
    }
}

/// Application form. Switches to the status tab a moment after a
/// successful submission.
#[component]
fn ApplicationForm(on_submitted: EventHandler<()>) -> Element {
    let queue = use_context::<ApplicationQueue>();
    let membership = use_context::<MembershipState>();
    let config = use_context::<SiteConfig>();
    let latency = config.membership_latency;
    let status_delay = config.status_tab_delay;

    let mut draft = use_signal(MembershipApplication::default);
    let mut submission = use_signal(FormSubmission::new);

    let handle_submit = move |_| {
        let application = draft.read().clone();
        if submission.write().begin(application.validate()).is_err() {
            return;
        }

        let queue = queue.clone();
        spawn(async move {
            simulate_latency(latency).await;

            match queue.submit(application) {
                Ok(reference) => {
                    membership.remember(reference);
                    submission.write().complete();

                    simulate_latency(status_delay).await;
                    on_submitted.call(());
                }
                Err(e) => submission.write().fail(e),
            }
        });
    };

    let handle_photo = move |e: FormEvent| {
        let name = e.files().and_then(|files| files.files().into_iter().next());
        draft.write().photo = name;
    };

    let error = submission.read().error().map(|e| e.to_string());
    let is_submitting = submission.read().is_submitting();

    if submission.read().is_submitted() {
        return rsx! {
            div {
                class: "max-w-2xl mx-auto text-center py-8 space-y-4",
                h3 { class: "text-xl font-semibold", "Application Submitted Successfully!" }
                p {
                    class: "text-gray-500",
                    "Thank you for applying. We'll review your application within 3-5 business days."
                }
                StatusBadge { status: ApplicationStatus::Pending }
            }
        };
    }

    let photo_label = draft
        .read()
        .photo
        .clone()
        .unwrap_or_else(|| "Click to upload photo".to_string());

    rsx! {
        form {
            class: "max-w-2xl mx-auto space-y-6 bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            onsubmit: handle_submit,

            if let Some(err) = error {
                div {
                    class: "p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                    "{err}"
                }
            }

            h3 { class: "text-lg font-semibold border-b pb-2", "Personal Information" }
            div {
                class: "grid md:grid-cols-2 gap-4",
                Field {
                    label: "Full Name *",
                    value: draft.read().full_name.clone(),
                    on_change: move |v| draft.write().full_name = v,
                }
                Field {
                    label: "Email Address *",
                    input_type: "email",
                    value: draft.read().email.clone(),
                    on_change: move |v| draft.write().email = v,
                }
                Field {
                    label: "Phone Number *",
                    input_type: "tel",
                    value: draft.read().phone.clone(),
                    on_change: move |v| draft.write().phone = v,
                }
                Field {
                    label: "Date of Birth *",
                    input_type: "date",
                    value: draft.read().date_of_birth.clone(),
                    on_change: move |v| draft.write().date_of_birth = v,
                }
            }

            h3 { class: "text-lg font-semibold border-b pb-2", "Address Information" }
            Field {
                label: "Street Address *",
                value: draft.read().address.clone(),
                on_change: move |v| draft.write().address = v,
            }
            div {
                class: "grid md:grid-cols-3 gap-4",
                Field {
                    label: "City *",
                    value: draft.read().city.clone(),
                    on_change: move |v| draft.write().city = v,
                }
                Field {
                    label: "State/Province *",
                    value: draft.read().state.clone(),
                    on_change: move |v| draft.write().state = v,
                }
                Field {
                    label: "ZIP/Postal Code *",
                    value: draft.read().zip_code.clone(),
                    on_change: move |v| draft.write().zip_code = v,
                }
            }
            Field {
                label: "Country *",
                value: draft.read().country.clone(),
                on_change: move |v| draft.write().country = v,
            }

            h3 { class: "text-lg font-semibold border-b pb-2", "Profile Photo" }
            label {
                class: "block border-2 border-dashed border-gray-300 rounded-lg p-6 text-center cursor-pointer",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: handle_photo,
                }
                p { class: "font-medium", "{photo_label}" }
                p { class: "text-sm text-gray-500", "JPG, PNG or GIF (max 5MB)" }
            }

            h3 { class: "text-lg font-semibold border-b pb-2", "Motivation" }
            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-2",
                    "Why do you want to join HopeHands? *"
                }
                textarea {
                    value: draft.read().reason.clone(),
                    oninput: move |e| draft.write().reason = e.value(),
                    rows: "5",
                    class: INPUT_CLASS,
                }
            }

            button {
                r#type: "submit",
                class: "w-full bg-emerald-600 text-white py-3 px-4 rounded-md hover:bg-emerald-700 disabled:opacity-50",
                disabled: is_submitting,
                if is_submitting {
                    "Submitting Application"
                    LoadingDots {}
                } else {
                    "Submit Membership Application"
                }
            }
        }
    }
}

#[component]
fn Field(
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-2", "{label}" }
            input {
                r#type: input_type,
                value: value,
                oninput: move |e| on_change.call(e.value()),
                class: INPUT_CLASS,
            }
        }
    }
}

/// Status of the application submitted from this page load
#[component]
fn MemberStatus(on_apply: EventHandler<()>) -> Element {
    let queue = use_context::<ApplicationQueue>();
    let membership = use_context::<MembershipState>();

    let last_reference = membership.last_reference;
    let record: Option<ApplicationRecord> = last_reference().and_then(|r| queue.get(r));

    let Some(record) = record else {
        return rsx! {
            div {
                class: "max-w-4xl mx-auto rounded-lg border border-gray-200 p-8 text-center",
                h3 { class: "text-xl font-semibold mb-2", "No Application Found" }
                p { class: "text-gray-500 mb-6", "You haven't submitted a membership application yet." }
                button {
                    class: "px-4 py-2 rounded-md text-white bg-emerald-600 hover:bg-emerald-700",
                    onclick: move |_| on_apply.call(()),
                    "Apply for Membership"
                }
            }
        };
    };

    let submitted = record.submitted_at.format("%B %-d, %Y").to_string();

    match record.status {
        ApplicationStatus::Approved => {
            let member_number = record.member_number.clone().unwrap_or_default();
            rsx! {
                div {
                    class: "max-w-4xl mx-auto space-y-6",
                    div {
                        class: "rounded-lg bg-emerald-50 p-8 text-center space-y-3",
                        h3 { class: "text-2xl font-bold", "Welcome to HopeHands!" }
                        StatusBadge { status: record.status }
                        p {
                            class: "text-gray-500",
                            "Congratulations! Your membership has been approved. You now have access to all member benefits."
                        }
                    }
                    div {
                        class: "rounded-lg border border-gray-200 p-6 space-y-2 text-sm",
                        p { class: "font-semibold text-base", "{record.application.full_name}" }
                        p { "Member ID: {member_number}" }
                        p { "Join Date: {submitted}" }
                    }
                }
            }
        }
        _ => rsx! {
            div {
                class: "max-w-4xl mx-auto rounded-lg border border-gray-200 p-8 text-center space-y-6",
                h3 { class: "text-xl font-semibold", "Application Under Review" }
                StatusBadge { status: record.status }
                p {
                    class: "text-gray-500",
                    "Thank you for your application! Our admin team is currently reviewing your submission."
                }
                div {
                    class: "text-sm text-gray-500 space-y-1",
                    p { "Submitted: {submitted}" }
                    p { "Expected Response: Within 3-5 business days" }
                }
            }
        },
    }
}

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> Element {
    let class = match status {
        ApplicationStatus::Approved => "bg-green-100 text-green-800",
        ApplicationStatus::Pending => "bg-yellow-100 text-yellow-800",
        ApplicationStatus::None => "bg-gray-100 text-gray-700",
    };
    let label = status.label();

    rsx! {
        span {
            class: "inline-block px-3 py-1 rounded-full text-xs font-medium {class}",
            "Status: {label}"
        }
    }
}
