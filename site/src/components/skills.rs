use leptos::prelude::*;

use super::common::SectionHeader;
use super::layout::use_theme;
use crate::types::{Skill, SkillCategory};

/// Grid of skill cards with percentage bars (`#skills`).
#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="A comprehensive overview of my technical skills and proficiency levels"
                />
                <div class="grid-3">
                    {categories
                        .into_iter()
                        .map(|category| view! { <SkillCard category=category /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="card skill-card">
            <h3 class="card-title">{category.title}</h3>
            <div class="skill-list">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| view! { <SkillBar skill=skill /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Name, clamped percentage and a determinate progress bar.
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let fill = skill.fill_percent();
    let style = format!(
        "width: {fill}%; background-image: {}",
        use_theme().primary_gradient()
    );

    view! {
        <div class="skill-row">
            <div class="skill-label">
                <span class="skill-name">{skill.name.clone()}</span>
                <span class="skill-level">{format!("{fill}%")}</span>
            </div>
            <div
                class="skill-bar"
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=fill.to_string()
            >
                <div class="skill-bar-fill" style=style></div>
            </div>
        </div>
    }
}
