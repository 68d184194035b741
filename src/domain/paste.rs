#[derive(Debug, Clone)]
pub struct Paste {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub public: bool,
    pub user_agent: Option<String>,
    pub ip_addr: Option<String>,
    pub owner_id: i64,
    pub burn: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewPaste {
    pub title: String,
    pub content: String,
    pub public: bool,
    pub burn: bool,
    pub user_agent: Option<String>,
    pub ip_addr: Option<String>,
    pub owner_id: i64,
}

/// Filter used by the `paste` subscription.
#[derive(Debug, Clone, Default)]
pub struct PasteMatch {
    pub id: Option<i64>,
    pub title: Option<String>,
}

impl PasteMatch {
    pub fn matches(&self, paste: &Paste) -> bool {
        if let Some(id) = self.id {
            if paste.id != id {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if &paste.title != title {
                return false;
            }
        }
        true
    }
}
