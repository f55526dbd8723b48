use yew::prelude::*;

pub const MAX_STARS: usize = 5;

/// Splits a rating into (full, half, empty) stars out of `MAX_STARS`.
/// Any fractional part shows as a single half star.
pub fn star_split(rating: f32) -> (usize, usize, usize) {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, MAX_STARS as f32) };
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() > 0.0);
    (full, half, MAX_STARS - full - half)
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub rating: f32,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let (full, half, empty) = star_split(props.rating);
    html! {
        <div class="star-rating" aria-label={format!("דירוג {} מתוך {}", props.rating, MAX_STARS)}>
            { for (0..full).map(|_| html! { <i class="fas fa-star"></i> }) }
            { for (0..half).map(|_| html! { <i class="fas fa-star-half-stroke"></i> }) }
            { for (0..empty).map(|_| html! { <i class="far fa-star"></i> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratings_have_no_half_star() {
        assert_eq!(star_split(5.0), (5, 0, 0));
        assert_eq!(star_split(3.0), (3, 0, 2));
        assert_eq!(star_split(0.0), (0, 0, 5));
    }

    #[test]
    fn fractions_show_one_half_star() {
        assert_eq!(star_split(4.5), (4, 1, 0));
        assert_eq!(star_split(2.3), (2, 1, 2));
        assert_eq!(star_split(0.5), (0, 1, 4));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(star_split(7.0), (5, 0, 0));
        assert_eq!(star_split(-1.0), (0, 0, 5));
        assert_eq!(star_split(f32::NAN), (0, 0, 5));
    }
}
