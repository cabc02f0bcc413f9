//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuFile as File, LuFilePlus as NewFile, LuFileText as FileText, LuFolder as Folder,
        LuFolderPlus as NewFolder, LuGitBranch as Branch, LuHouse as Home, LuImage as FileImage,
        LuLoader as Loading, LuPencil as Edit, LuPin as Pin, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Loading, BsArrowUp as Up, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPlus as NewFile, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsFolderPlus as NewFolder, BsGit as Branch, BsHouseFill as Home, BsPencil as Edit,
        BsPinAngle as Pin, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(UP, Up);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(NEW_FILE, NewFile);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(UPLOAD, Upload);
themed_icon!(BRANCH, Branch);
themed_icon!(PIN, Pin);
themed_icon!(EDIT, Edit);
themed_icon!(CLOSE, Close);
themed_icon!(LOADING, Loading);
