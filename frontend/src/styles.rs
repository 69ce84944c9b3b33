use roulette_shared::PlayerColor;

pub const PAGE: &str = "h-screen flex flex-col overflow-hidden bg-gray-950 text-gray-100";
pub const HEADER: &str = "py-3 border-b border-gray-800/50 flex-shrink-0 text-center";
pub const TITLE: &str = "text-2xl md:text-3xl font-bold text-yellow-500 tracking-widest";
pub const SUBTITLE: &str = "text-gray-500 text-xs tracking-wider";
pub const MAIN: &str = "flex-1 py-4 overflow-auto container mx-auto px-4 max-w-6xl";
pub const GRID: &str = "inline-grid grid-cols-5 gap-[5px] bg-gray-900/80 p-[2px] rounded";
pub const ICON: &str = "w-16 h-16 flex items-center justify-center rounded text-xs font-bold transition-all duration-150";
pub const SLOTS: &str = "grid grid-cols-3 gap-3 mb-4";
pub const SLOT: &str = "relative flex flex-col items-center pt-6 pb-3 px-3 rounded-lg border h-[185px] transition-all duration-300";
pub const PORTRAIT: &str = "w-20 h-24 flex items-end justify-center rounded pb-1 text-sm";
pub const OPTIONS: &str = "flex flex-wrap items-center justify-center gap-4 mb-3 text-sm text-gray-300";
pub const CHECKBOX: &str = "w-4 h-4 cursor-pointer disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "px-8 py-3 bg-yellow-600 text-gray-950 font-bold text-lg rounded hover:bg-yellow-500 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "px-6 py-3 bg-gray-700 text-gray-300 font-medium rounded hover:bg-gray-600 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";

pub fn slot_border(color: PlayerColor) -> &'static str {
    match color {
        PlayerColor::Blue => "border-blue-500 bg-blue-500/10",
        PlayerColor::Red => "border-red-500 bg-red-500/10",
        PlayerColor::Green => "border-green-500 bg-green-500/10",
    }
}

pub fn marker(color: PlayerColor) -> &'static str {
    match color {
        PlayerColor::Blue => "w-2 h-2 rounded-full bg-blue-500",
        PlayerColor::Red => "w-2 h-2 rounded-full bg-red-500",
        PlayerColor::Green => "w-2 h-2 rounded-full bg-green-500",
    }
}

pub fn ring(color: PlayerColor) -> &'static str {
    match color {
        PlayerColor::Blue => "ring-2 ring-blue-500",
        PlayerColor::Red => "ring-2 ring-red-500",
        PlayerColor::Green => "ring-2 ring-green-500",
    }
}
