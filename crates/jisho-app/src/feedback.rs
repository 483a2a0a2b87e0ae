use jisho_core::SourceMetadata;
use jisho_types::DisplayItem;
use serde::Serialize;

/// Launcher's stock web icon
pub const ICON_WEB: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/BookmarkIcon.icns";

/// Script filter document the launcher renders
#[derive(Debug, Serialize)]
pub struct Feedback {
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackItem {
    pub title: String,
    pub subtitle: String,
    /// Passed to the follow-up action
    pub arg: String,
    pub valid: bool,
    pub text: LargeText,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicklookurl: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LargeText {
    pub largetype: String,
}

#[derive(Debug, Serialize)]
pub struct Icon {
    pub path: String,
}

impl Feedback {
    pub fn new(items: Vec<DisplayItem>, source: &SourceMetadata) -> Self {
        let items = items
            .into_iter()
            .map(|item| FeedbackItem {
                quicklookurl: source.lookup_link(&item.canonical_term),
                text: LargeText {
                    largetype: item.title.clone(),
                },
                icon: Icon {
                    path: ICON_WEB.to_string(),
                },
                valid: true,
                title: item.title,
                subtitle: item.subtitle,
                arg: item.canonical_term,
            })
            .collect();

        Self { items }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceMetadata {
        SourceMetadata {
            name: "Jisho".to_string(),
            lookup_url: "https://jisho.org/search/".to_string(),
        }
    }

    #[test]
    fn test_item_fields() {
        let feedback = Feedback::new(
            vec![DisplayItem {
                title: "猫、 貓".to_string(),
                subtitle: "ねこ | cat".to_string(),
                canonical_term: "猫".to_string(),
            }],
            &source(),
        );

        let json: serde_json::Value =
            serde_json::from_str(&feedback.to_json(false).unwrap()).unwrap();
        let item = &json["items"][0];
        assert_eq!(item["title"], "猫、 貓");
        assert_eq!(item["subtitle"], "ねこ | cat");
        assert_eq!(item["arg"], "猫");
        assert_eq!(item["valid"], true);
        assert_eq!(item["text"]["largetype"], "猫、 貓");
        assert_eq!(item["icon"]["path"], ICON_WEB);
        assert_eq!(item["quicklookurl"], "https://jisho.org/search/%E7%8C%AB");
    }

    #[test]
    fn test_order_preserved() {
        let items = (0..3)
            .map(|n| DisplayItem {
                title: format!("title{n}"),
                subtitle: String::new(),
                canonical_term: format!("term{n}"),
            })
            .collect();

        let feedback = Feedback::new(items, &source());

        let args: Vec<&str> = feedback.items.iter().map(|i| i.arg.as_str()).collect();
        assert_eq!(args, vec!["term0", "term1", "term2"]);
    }

    #[test]
    fn test_quicklook_link_encodes_term() {
        let feedback = Feedback::new(
            vec![DisplayItem {
                title: "C#".to_string(),
                subtitle: String::new(),
                canonical_term: "C#".to_string(),
            }],
            &source(),
        );

        assert_eq!(
            feedback.items[0].quicklookurl.as_deref(),
            Some("https://jisho.org/search/C%23")
        );
        assert_eq!(feedback.items[0].arg, "C#");
    }

    #[test]
    fn test_quicklook_omitted_without_base_url() {
        let source = SourceMetadata {
            name: "local".to_string(),
            lookup_url: String::new(),
        };
        let feedback = Feedback::new(
            vec![DisplayItem {
                title: "猫".to_string(),
                subtitle: String::new(),
                canonical_term: "猫".to_string(),
            }],
            &source,
        );

        let json: serde_json::Value =
            serde_json::from_str(&feedback.to_json(false).unwrap()).unwrap();
        assert!(json["items"][0].get("quicklookurl").is_none());
    }

    #[test]
    fn test_empty_feedback() {
        let feedback = Feedback::new(vec![], &source());
        assert_eq!(feedback.to_json(false).unwrap(), r#"{"items":[]}"#);
    }
}
