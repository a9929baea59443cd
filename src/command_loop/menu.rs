pub const MENU: &str = "\nInventory Management System\n\
1. Add Product\n\
2. Remove Product\n\
3. Update Product\n\
4. View Inventory\n\
5. Search Product\n\
6. Save and Exit";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    View,
    Search,
    SaveAndExit,
}

impl MenuChoice {
    /// Parses a menu line. Anything other than an integer 1 to 6 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Remove),
            3 => Some(Self::Update),
            4 => Some(Self::View),
            5 => Some(Self::Search),
            6 => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}
