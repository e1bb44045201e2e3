//! User-facing strings (pt-BR).

pub const TITLE_SUCCESS: &str = "Sucesso";
pub const TITLE_ERROR: &str = "Erro";
pub const TITLE_CONNECTION_ERROR: &str = "Erro de Conexão";
pub const CHECK_CONNECTION: &str = "Verifique sua conexão com a internet.";

pub mod auth {
    pub const MISSING_FIELDS: &str = "Por favor, preencha todos os campos.";
    pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres.";
    pub const CONNECTION_ERROR: &str =
        "Erro de conexão. Verifique sua internet e tente novamente.";

    pub const LOGIN_SUCCESS: &str = "Login realizado com sucesso!";
    pub const LOGIN_FAILED: &str = "Credenciais inválidas. Tente novamente.";
    pub const LOGIN_IDLE: &str = "Entrar";
    pub const LOGIN_BUSY: &str = "Entrando...";

    pub const REGISTER_SUCCESS: &str = "Conta criada com sucesso! Redirecionando para login...";
    pub const REGISTER_FAILED: &str = "Erro ao criar conta. Tente novamente.";
    pub const REGISTER_IDLE: &str = "Criar conta";
    pub const REGISTER_BUSY: &str = "Criando conta...";
}

pub mod equipment {
    pub const TITLE_ADD: &str = "Adicionar Equipamento";
    pub const TITLE_EDIT: &str = "Editar Equipamento";
    pub const CREATED: &str = "Equipamento criado com sucesso!";
    pub const UPDATED: &str = "Equipamento atualizado com sucesso!";
    pub const DELETED: &str = "Equipamento excluído com sucesso!";
    pub const LOAD_FAILED: &str = "Não foi possível carregar os equipamentos.";
    pub const FETCH_FAILED: &str = "Não foi possível carregar os dados do equipamento.";
    pub const SAVE_FAILED: &str = "Não foi possível salvar o equipamento.";
    pub const DELETE_FAILED: &str = "Não foi possível excluir o equipamento.";
    pub const CONFIRM_DELETE_TITLE: &str = "Excluir Equipamento";
    pub const CONFIRM_DELETE_MESSAGE: &str =
        "Tem certeza que deseja excluir este equipamento? Esta ação não pode ser desfeita.";
    pub const EMPTY_TITLE: &str = "Nenhum equipamento encontrado";
    pub const EMPTY_HINT: &str =
        "Clique em \"Adicionar Equipamento\" para criar o primeiro equipamento.";
    pub const ALL_TYPES: &str = "Todos os tipos";
    pub const ALL_STATUSES: &str = "Todos os status";
}

pub mod maintenance {
    pub const TITLE_ADD: &str = "Adicionar Manutenção";
    pub const TITLE_EDIT: &str = "Editar Manutenção";
    pub const CREATED: &str = "Manutenção criada com sucesso!";
    pub const UPDATED: &str = "Manutenção atualizada com sucesso!";
    pub const DELETED: &str = "Manutenção excluída com sucesso!";
    pub const LOAD_FAILED: &str = "Não foi possível carregar as manutenções.";
    pub const FETCH_FAILED: &str = "Não foi possível carregar os dados da manutenção.";
    pub const SAVE_FAILED: &str = "Não foi possível salvar a manutenção.";
    pub const DELETE_FAILED: &str = "Não foi possível excluir a manutenção.";
    pub const CONFIRM_DELETE_TITLE: &str = "Excluir Manutenção";
    pub const CONFIRM_DELETE_MESSAGE: &str =
        "Tem certeza que deseja excluir esta manutenção? Esta ação não pode ser desfeita.";
    pub const EMPTY_TITLE: &str = "Nenhuma manutenção encontrada";
    pub const EMPTY_HINT: &str =
        "Clique em \"Adicionar Manutenção\" para criar a primeira manutenção.";
    pub const UNKNOWN_EQUIPMENT: &str = "Equipamento não identificado";
    pub const UNKNOWN_TYPE: &str = "N/A";
    pub const SELECT_EQUIPMENT: &str = "Selecione um equipamento";
    pub const ALL_EQUIPMENTS: &str = "Todos os equipamentos";
    pub const ALL_STATUSES: &str = "Todos os status";
}
