//! User-facing text.
//!
//! The site is Russian-only; every string the user sees lives here.

/// Alert when checking out an empty cart.
pub const CART_EMPTY: &str = "Корзина пуста!";

/// Alert when clearing an already empty cart.
pub const CART_ALREADY_EMPTY: &str = "Корзина уже пуста!";

/// Confirmation question before clearing the cart.
pub const CONFIRM_CLEAR: &str = "Вы уверены, что хотите очистить корзину?";

/// Notification after the cart was cleared.
pub const CART_CLEARED: &str = "Корзина очищена!";

/// Body of the empty cart page.
pub const EMPTY_CART_PAGE: &str = "Ваша корзина пуста";

pub const TOTAL_LABEL: &str = "Итого";

/// Placeholder shown by the auth button.
pub const AUTH_PLACEHOLDER: &str = "Форма авторизации\n\n\
В реальном приложении здесь будет окно для входа в систему с полями:\n\
- Email/Телефон\n\
- Пароль\n\n\
А также кнопки:\n\
- Войти\n\
- Зарегистрироваться\n\
- Восстановить пароль";

/// Notification after a product was added.
#[must_use]
pub fn added_to_cart(name: &str) -> String {
    format!("{name} добавлен в корзину! 🛒")
}

/// Checkout acknowledgment wrapping the order summary.
#[must_use]
pub fn order_placed(details: &str, total: &str) -> String {
    format!(
        "🎉 Заказ оформлен!\n\nДетали заказа:\n{details}\n\n💰 {TOTAL_LABEL}: {total}\n\n\
         Ожидайте звонка для подтверждения. Спасибо за заказ!"
    )
}
