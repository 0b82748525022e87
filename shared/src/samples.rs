//! 内置示例数据
//!
//! 远端集合为空或不可达时使用的固定活动集合，以及首页的静态内容。

use crate::Activity;

pub const SAMPLE_GUIDE_ID: &str = "guide_1";

/// Number of sample activities written by the seeding routine.
pub const SEED_COUNT: usize = 3;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    location: &str,
    price: u64,
    rating: f32,
    image: &str,
    duration: &str,
    kind: &str,
    description: &str,
) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
        price,
        duration: duration.to_string(),
        location: location.to_string(),
        images: vec![image.to_string()],
        rating: Some(rating),
        guide_id: SAMPLE_GUIDE_ID.to_string(),
    }
}

pub fn fallback_activities() -> Vec<Activity> {
    vec![
        sample(
            "1",
            "Excursion en pirogue traditionnelle",
            "Dakar, Sénégal",
            45000,
            4.8,
            "https://images.unsplash.com/photo-1735293221044-60ac95fb197f?q=80&w=800",
            "4h",
            "Excursion bateau",
            "Une balade authentique le long de la côte dakaroise.",
        ),
        sample(
            "2",
            "Safari authentique en brousse",
            "Kenya",
            120000,
            4.9,
            "https://images.unsplash.com/photo-1758881534566-fd5c54d7e7c8?q=80&w=800",
            "Journée",
            "Safari",
            "Observez la faune sauvage dans son habitat naturel.",
        ),
        sample(
            "3",
            "Tour des îles au coucher du soleil",
            "Sénégal",
            35000,
            4.7,
            "https://images.unsplash.com/photo-1630510590519-0976dc4cc250?q=80&w=800",
            "3h",
            "Excursion bateau",
            "Profitez d'un moment magique sur l'eau.",
        ),
        sample(
            "4",
            "Visite historique de Gorée",
            "Dakar, Sénégal",
            25000,
            4.9,
            "https://images.unsplash.com/photo-1759252973832-617895b7ef4d?q=80&w=800",
            "5h",
            "Culturel",
            "Découvrez l'histoire poignante de l'île de Gorée.",
        ),
        sample(
            "5",
            "Plongée dans les récifs coralliens",
            "Mombasa, Kenya",
            80000,
            4.6,
            "https://images.unsplash.com/photo-1711802536786-149a0d0c5879?q=80&w=800",
            "4h",
            "Plongée",
            "Explorez les fonds marins exceptionnels de l'Océan Indien.",
        ),
    ]
}

/// 按 id 查找示例活动（详情页降级使用）
pub fn fallback_activity(id: &str) -> Option<Activity> {
    fallback_activities().into_iter().find(|a| a.id == id)
}

pub fn featured_activities() -> Vec<Activity> {
    fallback_activities().into_iter().take(SEED_COUNT).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: &'static str,
    pub image: &'static str,
    pub activities: u32,
}

pub fn popular_destinations() -> [Destination; 4] {
    [
        Destination {
            name: "Dakar, Sénégal",
            image: "https://images.unsplash.com/photo-1735293221044-60ac95fb197f?q=80&w=800",
            activities: 12,
        },
        Destination {
            name: "Lamu, Kenya",
            image: "https://images.unsplash.com/photo-1711802536786-149a0d0c5879?q=80&w=800",
            activities: 8,
        },
        Destination {
            name: "Banana Islands, Sierra Leone",
            image: "https://images.unsplash.com/photo-1630510590519-0976dc4cc250?q=80&w=800",
            activities: 5,
        },
        Destination {
            name: "Okavango Delta, Botswana",
            image: "https://images.unsplash.com/photo-1758881534566-fd5c54d7e7c8?q=80&w=800",
            activities: 15,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_has_five_distinct_ids() {
        let all = fallback_activities();
        assert_eq!(all.len(), 5);
        let mut ids: Vec<_> = all.iter().map(|a| a.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(all.iter().all(|a| a.cover_image().is_some()));
    }

    #[test]
    fn fallback_lookup_by_id() {
        assert_eq!(fallback_activity("4").unwrap().title, "Visite historique de Gorée");
        assert!(fallback_activity("42").is_none());
    }

    #[test]
    fn featured_are_the_first_three() {
        let featured: Vec<_> = featured_activities().into_iter().map(|a| a.id).collect();
        assert_eq!(featured, vec!["1", "2", "3"]);
    }
}
