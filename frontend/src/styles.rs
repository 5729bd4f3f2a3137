pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const PAGE: &str = "container mx-auto px-4 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700 backdrop-blur-sm";
pub const TITLE: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TITLE_ACCENT: &str = "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-blue-600 dark:text-blue-400";
pub const ERROR_BOX: &str = "text-red-500 bg-red-50 dark:bg-red-900/20 p-3 rounded-lg text-center";
pub const WHEEL_WRAP: &str = "relative mx-auto mb-8 flex justify-center items-center";
pub const LANGUAGE_BUTTON: &str = "px-3 py-1.5 text-sm font-medium rounded-full border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors duration-200";
