//! Built-in schemas that can seed a configuration.

use serde::{Deserialize, Serialize};

use super::{Choice, ChoiceInputType, FieldDescriptor, FieldSchema, SelectOption, TextInputType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Customer inquiry form: contact details, reply preferences, inquiry body
    Contact,
}

impl Preset {
    pub fn schema(&self) -> FieldSchema {
        match self {
            Preset::Contact => contact_form(),
        }
    }
}

pub fn contact_form() -> FieldSchema {
    FieldSchema::new(vec![
        FieldDescriptor::text("name", "お名前", TextInputType::Text, "例）山田　太郎"),
        FieldDescriptor::text(
            "email",
            "メールアドレス",
            TextInputType::Email,
            "例）example@gmail.com",
        ),
        FieldDescriptor::text("tel", "電話番号", TextInputType::Tel, "例）080-1234-5678"),
        FieldDescriptor::text(
            "address",
            "ご住所",
            TextInputType::Text,
            "例）東京都千代田区丸の内1丁目9-2",
        ),
        FieldDescriptor::choice(
            "contact",
            "ご希望の返信方法",
            ChoiceInputType::Radio,
            vec![
                Choice::new("メール", 0),
                Choice::new("電話", 1),
                Choice::new("どちらでも可", 2),
            ],
        ),
        FieldDescriptor::choice(
            "time",
            "連絡可能な時間帯（電話）",
            ChoiceInputType::Checkbox,
            vec![
                Choice::new("09:00〜12:00", 0),
                Choice::new("13:00〜16:00", 1),
                Choice::new("16:00〜19:00", 2),
            ],
        ),
        FieldDescriptor::select(
            "inquiry_kind",
            "お問い合せの種類",
            vec![
                SelectOption::new("返品について", 0),
                SelectOption::new("発送について", 1),
                SelectOption::new("その他", 2),
            ],
        ),
        FieldDescriptor::textarea(
            "inquiry_detail",
            "お問い合せ内容",
            "例）お問い合わせ内容詳細をご記入ください",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator::SchemaValidator;

    #[test]
    fn test_contact_form_shape() {
        let schema = contact_form();
        let kinds: Vec<_> = schema.iter().map(|f| f.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["text", "text", "text", "text", "choice", "choice", "select", "textarea"]
        );
    }

    #[test]
    fn test_contact_form_is_valid() {
        assert!(SchemaValidator::validate(&Preset::Contact.schema()).is_ok());
    }
}
