//! Circular Progress Indicator
//!
//! SVG ring with the percentage in the middle, colored per task icon.

use leptos::prelude::*;

#[component]
pub fn ProgressRing(
    /// Integer percent, 0-100
    progress: u8,
    #[prop(default = 43.0)] size: f64,
    #[prop(default = 3.2)] stroke_width: f64,
    #[prop(into)] filled_color: String,
    #[prop(into)] unfilled_color: String,
) -> impl IntoView {
    let radius = (size - stroke_width) / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let offset = circumference * (1.0 - f64::from(progress) / 100.0);
    let center = size / 2.0;

    view! {
        <svg
            class="progress-ring"
            width=size
            height=size
            viewBox=format!("0 0 {size} {size}")
        >
            <circle
                cx=center
                cy=center
                r=radius
                fill="none"
                stroke=unfilled_color
                stroke-width=stroke_width
            />
            <circle
                cx=center
                cy=center
                r=radius
                fill="none"
                stroke=filled_color
                stroke-width=stroke_width
                stroke-linecap="round"
                stroke-dasharray=format!("{circumference}")
                stroke-dashoffset=format!("{offset}")
                transform=format!("rotate(-90 {center} {center})")
            />
            <text
                x=center
                y=center
                text-anchor="middle"
                dominant-baseline="central"
                class="progress-ring-label"
            >
                {format!("{progress}%")}
            </text>
        </svg>
    }
}
