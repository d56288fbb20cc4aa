//! Prayer entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::prayer::{Prayer, PrayerGroupInfo, PrayerWithGroup};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the prayers table.
#[derive(Debug, Clone, FromRow)]
pub struct PrayerEntity {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub prayer: String,
    pub prayer_for_other: bool,
    pub other_person_name: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub notified_by_email: bool,
    pub source: Option<String>,
    pub qr_code_group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<PrayerEntity> for Prayer {
    fn from(e: PrayerEntity) -> Self {
        Prayer {
            id: e.id,
            name: e.name,
            email: e.email,
            prayer: e.prayer,
            prayer_for_other: e.prayer_for_other,
            other_person_name: e.other_person_name,
            response: e.response,
            responded_at: e.responded_at,
            notified_by_email: e.notified_by_email,
            source: e.source,
            qr_code_group_id: e.qr_code_group_id,
            created_at: e.created_at,
        }
    }
}

/// Prayer row joined with its QR group summary (LEFT JOIN, group optional).
#[derive(Debug, Clone, FromRow)]
pub struct PrayerWithGroupEntity {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub prayer: String,
    pub prayer_for_other: bool,
    pub other_person_name: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub notified_by_email: bool,
    pub source: Option<String>,
    pub qr_code_group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    // Group fields, NULL when the prayer has no group
    pub group_name: Option<String>,
    pub group_slug: Option<String>,
    pub group_color: Option<String>,
}

impl From<PrayerWithGroupEntity> for PrayerWithGroup {
    fn from(e: PrayerWithGroupEntity) -> Self {
        let qr_code_group = match (e.qr_code_group_id, e.group_name, e.group_slug, e.group_color)
        {
            (Some(id), Some(name), Some(slug), Some(color)) => Some(PrayerGroupInfo {
                id,
                name,
                slug,
                color,
            }),
            _ => None,
        };

        PrayerWithGroup {
            prayer: Prayer {
                id: e.id,
                name: e.name,
                email: e.email,
                prayer: e.prayer,
                prayer_for_other: e.prayer_for_other,
                other_person_name: e.other_person_name,
                response: e.response,
                responded_at: e.responded_at,
                notified_by_email: e.notified_by_email,
                source: e.source,
                qr_code_group_id: e.qr_code_group_id,
                created_at: e.created_at,
            },
            qr_code_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(with_group: bool) -> PrayerWithGroupEntity {
        PrayerWithGroupEntity {
            id: Uuid::new_v4(),
            name: Some("Maria".to_string()),
            email: None,
            prayer: "Pelo culto".to_string(),
            prayer_for_other: false,
            other_person_name: None,
            response: None,
            responded_at: None,
            notified_by_email: false,
            source: with_group.then(|| "entrada".to_string()),
            qr_code_group_id: with_group.then(Uuid::new_v4),
            created_at: Utc::now(),
            group_name: with_group.then(|| "Entrada".to_string()),
            group_slug: with_group.then(|| "entrada".to_string()),
            group_color: with_group.then(|| "#6366f1".to_string()),
        }
    }

    #[test]
    fn test_with_group_conversion() {
        let converted: PrayerWithGroup = entity(true).into();
        let group = converted.qr_code_group.expect("group present");
        assert_eq!(group.slug, "entrada");
        assert_eq!(group.color, "#6366f1");
    }

    #[test]
    fn test_without_group_conversion() {
        let converted: PrayerWithGroup = entity(false).into();
        assert!(converted.qr_code_group.is_none());
        assert!(converted.prayer.qr_code_group_id.is_none());
    }
}
