const BASE: &str = "font-medium rounded-lg transition-all duration-300 cursor-pointer focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500";

#[derive(Debug, Clone, Copy, Default)]
pub enum Variant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Tailwind classes for a call-to-action, shared by `<button>` and `<a>` elements.
pub fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    let variant = match variant {
        Variant::Primary => {
            "bg-gradient-to-r from-blue-600 to-blue-700 text-white hover:shadow-lg hover:-translate-y-0.5"
        }
        Variant::Outline => {
            "border-2 border-gray-300 text-gray-900 dark:border-gray-600 dark:text-white hover:bg-gray-100 dark:hover:bg-gray-800"
        }
    };
    let size = match size {
        Size::Sm => "px-4 py-2 text-sm",
        Size::Md => "px-6 py-3 text-base",
        Size::Lg => "px-8 py-4 text-lg",
    };
    format!("{BASE} {variant} {size} {extra}")
}
