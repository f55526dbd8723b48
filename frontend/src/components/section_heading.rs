use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="eyebrow">{props.eyebrow}</span>
            <h2>{props.title}</h2>
            if let Some(subtitle) = props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}
