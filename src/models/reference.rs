use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reference {
    pub id: String,                // Unique ID for the reference
    pub category: String,          // Category tag used for client-side filtering
    pub institution: String,       // Client institution the program ran for
    pub title: String,             // Program title
    pub date: String,              // Display date, rendered verbatim
    pub description: String,       // Short description of the program
    #[serde(default)]
    pub image_url: Option<String>, // Card image; placeholder glyph when absent
    #[serde(default)]
    pub participants: Option<u32>, // Head count; line omitted when absent
}
