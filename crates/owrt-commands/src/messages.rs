//! Fixed reply texts and the reply keyboard layout

use owrt_common::ChatId;

/// Reply to `/start`
pub const START: &str =
    "Бот запущен. Команды: /clients, /openvpn, /interfaces, /rua_status, /rua_add <domain>, /rua_update";
/// Reply to anything that is not a known command
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда. Используй /start";
/// Reply to `/rua_add` without a domain
pub const RUA_ADD_USAGE: &str = "Использование: /rua_add <domain>";
/// Placeholder for a command that printed nothing
pub const EMPTY_OUTPUT: &str = "(пустой вывод)";
/// Reply for a command that ran past the timeout
pub const TIMED_OUT: &str = "Команда завершилась по таймауту";

/// Header of the `/clients` reply
pub const CLIENTS_HEADER: &str = "Клиенты:";
/// Header of the `/openvpn` reply
pub const OPENVPN_HEADER: &str = "OpenVPN:";
/// Header of the `/rua_status` reply
pub const RUA_STATUS_HEADER: &str = "ruantiblock:";
/// Header of the `/rua_add` reply
pub const RUA_ADD_HEADER: &str = "Добавление в list1:";
/// Header of the `/rua_update` reply
pub const RUA_UPDATE_HEADER: &str = "Обновление ruantiblock:";

/// Reply keyboard shown under every message, row by row
pub const KEYBOARD_LAYOUT: [&[&str]; 3] = [
    &["/start", "/clients", "/openvpn"],
    &["/interfaces", "/rua_status", "/rua_update"],
    &["/rua_add example.com"],
];

/// Reply sent to a chat that is not on the allow-list
pub fn unauthorized(chat_id: ChatId) -> String {
    format!("Несанкционированный доступ из чата {chat_id}, инцидент будет залогирован")
}

/// Reply for a command that could not be started at all
pub fn spawn_failed(error: &str) -> String {
    format!("Не удалось запустить команду: {error}")
}

/// A header line followed by command output
pub fn with_header(header: &str, output: &str) -> String {
    format!("{header}\n{output}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_mentions_chat() {
        let text = unauthorized(ChatId(-100));
        assert!(text.contains("-100"));
    }

    #[test]
    fn test_keyboard_lists_every_command() {
        let buttons: Vec<&str> = KEYBOARD_LAYOUT.iter().flat_map(|row| row.iter().copied()).collect();
        for command in ["/start", "/clients", "/openvpn", "/interfaces", "/rua_status", "/rua_update"] {
            assert!(buttons.contains(&command), "{command} missing from keyboard");
        }
        assert!(buttons.iter().any(|b| b.starts_with("/rua_add ")));
    }
}
