use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod date;
pub mod protocol;
pub mod samples;

pub use date::BookingDate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_IDENTITY_KEY: &str = "xamfi.mock_user";
pub const CURRENCY_SUFFIX: &str = "F CFA";
pub const DEFAULT_DISPLAY_NAME: &str = "Voyageur";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// A bookable tour or experience, as the views consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// 价格，单位为 F CFA（无小数）
    pub price: u64,
    pub duration: String,
    pub location: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub guide_id: String,
}

impl Activity {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// 转换为远端存储格式（images 序列化为 JSON 字符串）
    pub fn to_record(&self) -> ActivityRecord {
        ActivityRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            kind: self.kind.clone(),
            price: self.price,
            duration: self.duration.clone(),
            location: self.location.clone(),
            images: serde_json::to_string(&self.images).unwrap_or_else(|_| "[]".to_string()),
            rating: self.rating,
            guide_id: self.guide_id.clone(),
        }
    }
}

/// Remote wire shape of an activity. The document store keeps `images`
/// as a JSON-encoded array inside a string column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub images: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub guide_id: String,
}

impl ActivityRecord {
    /// 解析 images 字段。
    ///
    /// 字段为空或不是合法的 JSON 数组时返回 `Err`，调用方决定如何降级。
    pub fn parse_images(&self) -> Result<Vec<String>, serde_json::Error> {
        if self.images.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.images)
    }

    /// Converts into the view model. Fails when the images field is malformed.
    pub fn into_activity(self) -> Result<Activity, serde_json::Error> {
        let images = self.parse_images()?;
        Ok(Activity {
            id: self.id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            price: self.price,
            duration: self.duration,
            location: self.location,
            images,
            rating: self.rating,
            guide_id: self.guide_id,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "En attente",
            BookingStatus::Confirmed => "Confirmé",
        }
    }
}

/// Create payload for the bookings collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub activity_id: String,
    pub traveler_id: String,
    pub date: String,
    pub participants: u32,
    pub status: BookingStatus,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(flatten)]
    pub base: NewBooking,
}

impl Booking {
    pub fn new(id: impl Into<String>, base: NewBooking) -> Self {
        Self {
            id: id.into(),
            base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    #[default]
    Traveler,
    Guide,
    BoatOwner,
}

impl ProfileRole {
    pub const ALL: [ProfileRole; 3] = [
        ProfileRole::Traveler,
        ProfileRole::Guide,
        ProfileRole::BoatOwner,
    ];

    /// 与序列化格式一致的标识符，用于 `<select>` 的 value
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileRole::Traveler => "traveler",
            ProfileRole::Guide => "guide",
            ProfileRole::BoatOwner => "boat_owner",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileRole::Traveler => "Voyageur",
            ProfileRole::Guide => "Guide",
            ProfileRole::BoatOwner => "Propriétaire de bateau",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    pub role: ProfileRole,
}

impl Profile {
    /// 首次访问时惰性创建的默认资料：显示名取邮箱 @ 之前的部分
    pub fn default_for(identity: &Identity) -> Self {
        let local = identity.email.split('@').next().unwrap_or_default().trim();
        let display_name = if local.is_empty() {
            DEFAULT_DISPLAY_NAME.to_string()
        } else {
            local.to_string()
        };
        Self {
            user_id: identity.id.clone(),
            display_name,
            role: ProfileRole::Traveler,
        }
    }
}

/// Local session record of the mock identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// 格式化价格，例如 `45000F CFA`
pub fn format_price(amount: u64) -> String {
    format!("{}{}", amount, CURRENCY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(images: &str) -> ActivityRecord {
        ActivityRecord {
            id: "a1".into(),
            title: "Pirogue".into(),
            description: String::new(),
            kind: "Excursion bateau".into(),
            price: 45000,
            duration: "4h".into(),
            location: "Dakar".into(),
            images: images.into(),
            rating: None,
            guide_id: "guide_1".into(),
        }
    }

    #[test]
    fn record_images_are_parsed_from_json_string() {
        let activity = record(r#"["https://a/1.jpg","https://a/2.jpg"]"#)
            .into_activity()
            .unwrap();
        assert_eq!(activity.images, vec!["https://a/1.jpg", "https://a/2.jpg"]);
        assert_eq!(activity.cover_image(), Some("https://a/1.jpg"));
    }

    #[test]
    fn empty_images_are_an_empty_list_but_malformed_ones_fail() {
        assert!(record("").into_activity().unwrap().images.is_empty());
        assert!(record("not json").parse_images().is_err());
        assert!(record("not json").into_activity().is_err());
    }

    #[test]
    fn record_deserializes_wire_names() {
        let raw = r#"{"id":"1","title":"T","type":"Safari","price":10,"images":"[]","guideId":"g"}"#;
        let rec: ActivityRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.kind, "Safari");
        assert_eq!(rec.guide_id, "g");
        assert_eq!(rec.location, "");
    }

    #[test]
    fn booking_serializes_flat_camel_case() {
        let booking = Booking::new(
            "b1",
            NewBooking {
                activity_id: "1".into(),
                traveler_id: "user_1".into(),
                date: "2024-03-15".into(),
                participants: 2,
                status: BookingStatus::Pending,
                total_price: 90000,
            },
        );
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["id"], "b1");
        assert_eq!(value["travelerId"], "user_1");
        assert_eq!(value["totalPrice"], 90000);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn default_profile_uses_email_local_part() {
        let identity = Identity {
            id: "user_1".into(),
            email: "test@example.com".into(),
            name: "Test User".into(),
        };
        let profile = Profile::default_for(&identity);
        assert_eq!(profile.display_name, "test");
        assert_eq!(profile.role, ProfileRole::Traveler);

        let anonymous = Identity {
            email: String::new(),
            ..identity
        };
        assert_eq!(Profile::default_for(&anonymous).display_name, "Voyageur");
    }

    #[test]
    fn role_round_trips_through_select_value() {
        for role in ProfileRole::ALL {
            assert_eq!(ProfileRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(ProfileRole::parse("admin"), None);
        assert_eq!(
            serde_json::to_string(&ProfileRole::BoatOwner).unwrap(),
            "\"boat_owner\""
        );
    }

    #[test]
    fn price_is_formatted_with_currency() {
        assert_eq!(format_price(45000), "45000F CFA");
    }
}
