//! Contact section: info list, social links, message form, snackbar.
//!
//! The form keeps its values in a local signal and never sends them
//! anywhere. Submitting opens a success snackbar that closes itself after
//! [`AUTO_HIDE`], when dismissed, or on a click elsewhere on the page.
//!
//! The form also carries `onsubmit="return false"`, so a prerendered page
//! running without the wasm bundle never submits it either.

use leptos::ev::{self, Event, MouseEvent, SubmitEvent};
use leptos::prelude::*;

use super::common::{SectionHeader, SocialLinks};
use super::icons::{ICON_CHECK_CIRCLE, ICON_CLOSE, ICON_ERROR_OUTLINE, Icon, icon_path};
use super::layout::use_theme;
use crate::state::{
    AUTO_HIDE, FormData, FormField, NotificationState, Severity, submit_contact,
};
use crate::types::{ContactInfoItem, SocialLink, link_rel, link_target};

#[component]
pub fn Contact(info: Vec<ContactInfoItem>, socials: Vec<SocialLink>) -> impl IntoView {
    let form = RwSignal::new(FormData::default());
    let notification = RwSignal::new(NotificationState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut generation = 0;
        form.with_untracked(|data| {
            notification.update(|n| generation = submit_contact(data, n));
        });
        set_timeout(
            move || {
                notification.update(|n| {
                    n.expire(generation);
                })
            },
            AUTO_HIDE,
        );
    };

    let (half, full): (Vec<FormField>, Vec<FormField>) =
        FormField::ALL.into_iter().partition(|f| f.is_half_width());

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <SectionHeader
                    title="Get in Touch"
                    subtitle="Feel free to reach out for collaborations or just a friendly chat"
                />
                <div class="contact-grid">
                    <div class="card contact-card">
                        <h3 class="card-title">"Contact Information"</h3>
                        <div class="contact-list">
                            {info
                                .into_iter()
                                .map(|item| view! { <ContactInfoRow item=item /> })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="social-block">
                            <h4 class="social-title">"Follow Me"</h4>
                            <SocialLinks links=socials />
                        </div>
                    </div>

                    <div class="card contact-card">
                        <h3 class="card-title">"Send a Message"</h3>
                        <form class="contact-form" onsubmit="return false" on:submit=on_submit>
                            <div class="form-row">
                                {half
                                    .into_iter()
                                    .map(|field| view! { <TextField field=field form=form /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            {full
                                .into_iter()
                                .map(|field| view! { <TextField field=field form=form /> })
                                .collect::<Vec<_>>()}
                            <button type="submit" class="btn btn-submit">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
            <Snackbar notification=notification />
        </section>
    }
}

#[component]
fn ContactInfoRow(item: ContactInfoItem) -> impl IntoView {
    view! {
        <div class="contact-item">
            <span class="contact-icon">
                <Icon path=icon_path(item.icon) />
            </span>
            <div>
                <div class="contact-item-title">{item.title}</div>
                <a
                    class="contact-item-link"
                    href=item.link.clone()
                    target=link_target(&item.link)
                    rel=link_rel(&item.link)
                >
                    {item.content}
                </a>
            </div>
        </div>
    }
}

/// Labeled, required input bound to one field of the form signal.
#[component]
fn TextField(field: FormField, form: RwSignal<FormData>) -> impl IntoView {
    let id = format!("contact-{}", field.name());
    let value = move || form.with(|f| f.get(field).to_owned());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                id=id.clone()
                class="field-input"
                type=kind
                name=field.name()
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=id.clone()
                class="field-input"
                name=field.name()
                rows="4"
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label class="field-label" for=id>
                {field.label()}
                " *"
            </label>
            {control}
        </div>
    }
}

/// Bottom-left alert bound to the notification signal.
#[component]
fn Snackbar(notification: RwSignal<NotificationState>) -> impl IntoView {
    let theme = use_theme();
    let success = theme.palette.success.main;
    let error = theme.palette.error.main;

    let severity = move || notification.with(|n| n.severity);
    let close = move |_| notification.update(NotificationState::close);

    // clicks inside the snackbar stop at its root and never get here
    let click_away = window_event_listener(ev::click, move |_| {
        if notification.with_untracked(|n| n.open) {
            notification.update(|n| {
                n.click_away();
            });
        }
    });
    on_cleanup(move || click_away.remove());

    view! {
        <Show when=move || notification.with(|n| n.open)>
            <div
                class="snackbar"
                role="status"
                aria-live="polite"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <div
                    class=move || severity().class()
                    style=move || {
                        let color = match severity() {
                            Severity::Success => success,
                            Severity::Error => error,
                        };
                        format!("background-color: {color}")
                    }
                >
                    {move || {
                        let path = match severity() {
                            Severity::Success => ICON_CHECK_CIRCLE,
                            Severity::Error => ICON_ERROR_OUTLINE,
                        };
                        view! { <Icon path=path size="22" /> }
                    }}
                    <span class="alert-message">
                        {move || notification.with(|n| n.message.clone())}
                    </span>
                    <button type="button" class="alert-close" aria-label="close" on:click=close>
                        <Icon path=ICON_CLOSE size="18" />
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{render, with_owner};
    use crate::content::ContactContent;

    fn render_contact() -> String {
        let contact = ContactContent::default();
        render(move || view! { <Contact info=contact.info socials=contact.socials /> })
    }

    #[test]
    fn one_row_per_contact_item() {
        let html = render_contact();
        let contact = ContactContent::default();

        assert_eq!(html.matches("class=\"contact-item\"").count(), contact.info.len());
        assert_eq!(
            html.matches("class=\"icon-btn social-link\"").count(),
            contact.socials.len()
        );
        assert!(html.contains("href=\"mailto:contact@example.com\""));
        assert!(html.contains("href=\"tel:+15551234567\""));
    }

    #[test]
    fn only_external_contact_links_open_new_tab() {
        let item = ContactInfoItem {
            icon: crate::types::IconKind::Phone,
            title: "Phone".into(),
            content: "555".into(),
            link: "tel:555".into(),
        };
        let html = render(move || view! { <Contact info=vec![item] socials=vec![] /> });
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn form_has_four_required_fields() {
        let html = render_contact();

        for field in FormField::ALL {
            assert!(html.contains(&format!("name=\"{}\"", field.name())), "{field:?}");
        }
        assert_eq!(html.matches("required").count(), 4);
        assert_eq!(html.matches("<textarea").count(), 1);
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn form_never_submits_without_scripts() {
        let html = render_contact();
        assert!(html.contains("onsubmit=\"return false\""));
        assert!(!html.contains("action="));
    }

    #[test]
    fn snackbar_hidden_until_submitted() {
        let html = render_contact();
        assert!(!html.contains("class=\"snackbar\""));
        assert!(!html.contains("Message sent successfully!"));
    }

    #[test]
    fn snackbar_shows_open_notification() {
        let html = render(|| {
            let notification = RwSignal::new(NotificationState::default());
            notification.update(|n| {
                submit_contact(&FormData::default(), n);
            });
            view! { <Snackbar notification=notification /> }
        });

        assert!(html.contains("class=\"snackbar\""));
        assert!(html.contains("alert alert-success"));
        assert!(html.contains("Message sent successfully!"));
        assert!(html.contains("background-color: #66bb6a"));
    }

    #[test]
    fn field_updates_touch_only_their_field() {
        with_owner(|| {
            let form = RwSignal::new(FormData {
                name: "Ada".into(),
                ..Default::default()
            });
            form.update(|f| f.set(FormField::Email, "ada@example.com".into()));

            form.with_untracked(|f| {
                assert_eq!(f.name, "Ada");
                assert_eq!(f.email, "ada@example.com");
                assert!(f.subject.is_empty());
                assert!(f.message.is_empty());
            });
        });
    }
}
