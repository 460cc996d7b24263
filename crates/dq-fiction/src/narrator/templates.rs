//! Message templates. Every message starts on a fresh line and ends with a
//! newline, except the prompt, which leaves the cursor on the same line.

use dq_map::{Branch, Room};

/// Prompt shown at the end of each turn.
pub const PROMPT: &str = "Escolha uma opção (E/D/S): ";

/// Welcome banner, printed once before the first turn.
///
/// `at_entrance` is false when the session was configured to start
/// somewhere other than the mansion entrance.
pub fn banner(start: &Room, at_entrance: bool) -> String {
    let start_line = if at_entrance {
        format!("Você começa no {}.", start.name())
    } else {
        format!("Você começa em '{}'.", start.name())
    };
    format!(
        "=== Bem-vindo a Detetive Quest ===\n\
         {start_line} Navegue até chegar em um cômodo sem saídas.\n"
    )
}

/// The current room and the options available from it.
pub fn room_options(room: &Room) -> String {
    let mut out = format!("\nVocê está em: {}\nOpções:\n", room.name());
    for branch in Branch::ALL {
        let target = match room.child(branch) {
            Some(child) => child.name().to_string(),
            None => format!("(não existe caminho à {})", branch.name()),
        };
        out.push_str(&format!(
            "  ({}) - Entrar à {:<8} -> {}\n",
            branch.key().to_ascii_uppercase(),
            branch.name(),
            target
        ));
    }
    out.push_str("  (S) - Sair do jogo (encerrar)\n");
    out
}

/// Acknowledges a successful move.
pub fn moving(branch: Branch) -> String {
    format!("\nIndo para a {}...\n", branch.name())
}

/// The chosen branch does not exist from `room`.
pub fn no_path(branch: Branch, room: &Room) -> String {
    format!(
        "\nNão existe um caminho à {} a partir de '{}'. Escolha outra opção.\n",
        branch.name(),
        room.name()
    )
}

/// The input was not a recognized choice.
pub fn invalid_option() -> String {
    "\nOpção inválida. Use 'E', 'D' ou 'S'.\n".to_string()
}

/// The player chose to leave.
pub fn farewell() -> String {
    "\nVocê optou por sair do jogo. Até a próxima!\n".to_string()
}

/// The player reached a room with no exits.
pub fn leaf_reached(room: &Room) -> String {
    format!(
        "\nVocê chegou ao cômodo sem saídas: '{}'.\n\
         Exploração encerrada. Obrigado por jogar Detetive Quest!\n",
        room.name()
    )
}
