//! Notification rendering for prayer response emails.
//!
//! Rendering is a pure template fill; delivery lives in the API layer so
//! these functions stay trivially testable.

/// Inputs for rendering a prayer response notification.
#[derive(Debug, Clone)]
pub struct ResponseEmailParams<'a> {
    /// Submitter name; falls back to a generic salutation when absent.
    pub name: Option<&'a str>,
    /// The original prayer request text.
    pub prayer: &'a str,
    /// The admin's response text.
    pub response: &'a str,
    /// Fully-built unsubscribe link for this recipient.
    pub unsubscribe_url: &'a str,
    /// Display name of the sending congregation.
    pub sender_name: &'a str,
}

/// A rendered email ready for delivery.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub body_text: String,
    pub body_html: String,
}

/// Salutation used when the submitter left no name.
const FALLBACK_SALUTATION: &str = "Irmão(ã)";

/// Renders the fixed HTML + plain-text response notification.
pub fn render_response_email(params: &ResponseEmailParams<'_>) -> RenderedEmail {
    let display_name = match params.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => FALLBACK_SALUTATION,
    };

    let subject = format!(
        "🙏 Resposta ao seu pedido de oração - {}",
        params.sender_name
    );

    let body_text = format!(
        r#"Olá, {name}!

Recebemos seu pedido de oração e gostaríamos de compartilhar uma mensagem com você:

SEU PEDIDO:
"{prayer}"

NOSSA RESPOSTA:
{response}

Continuamos orando por você e por suas necessidades. Que Deus abençoe sua vida abundantemente!

---
Não quer mais receber notificações? Acesse: {url}

Este é um email automático do sistema de orações de {sender}."#,
        name = display_name,
        prayer = params.prayer,
        response = params.response,
        url = params.unsubscribe_url,
        sender = params.sender_name,
    );

    let body_html = format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resposta ao seu pedido de oração</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f3f4f6;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 30px; text-align: center; border-radius: 12px 12px 0 0;">
            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">🙏 {sender}</h1>
            <p style="margin: 10px 0 0; color: #e0e7ff; font-size: 16px;">Resposta ao seu pedido de oração</p>
        </div>
        <div style="background-color: #ffffff; padding: 40px 30px; border-radius: 0 0 12px 12px;">
            <p style="color: #374151; font-size: 16px; line-height: 1.6;">Olá, <strong>{name}</strong>! 👋</p>
            <p style="color: #374151; font-size: 16px; line-height: 1.6;">Recebemos seu pedido de oração e gostaríamos de compartilhar uma mensagem com você:</p>
            <div style="background-color: #f9fafb; border-left: 4px solid #667eea; padding: 20px; margin-bottom: 30px; border-radius: 4px;">
                <p style="margin: 0 0 10px; color: #6b7280; font-size: 14px; font-weight: bold; text-transform: uppercase;">Seu Pedido</p>
                <p style="margin: 0; color: #374151; font-size: 15px; line-height: 1.6; font-style: italic;">"{prayer}"</p>
            </div>
            <div style="background-color: #eff6ff; border-left: 4px solid #3b82f6; padding: 20px; margin-bottom: 30px; border-radius: 4px;">
                <p style="margin: 0 0 10px; color: #1e40af; font-size: 14px; font-weight: bold; text-transform: uppercase;">💬 Nossa Resposta</p>
                <p style="margin: 0; color: #1e3a8a; font-size: 15px; line-height: 1.6; white-space: pre-wrap;">{response}</p>
            </div>
            <p style="color: #374151; font-size: 16px; line-height: 1.6;">Continuamos orando por você e por suas necessidades. Que Deus abençoe sua vida abundantemente! ✨</p>
            <div style="border-top: 1px solid #e5e7eb; padding-top: 20px; margin-top: 30px; text-align: center;">
                <a href="{url}" style="display: inline-block; padding: 12px 24px; background-color: #ef4444; color: #ffffff; text-decoration: none; border-radius: 8px; font-size: 14px; font-weight: 600;">🔕 Não quero mais receber notificações</a>
                <p style="margin: 15px 0 0; color: #9ca3af; font-size: 12px;">Este é um email automático do sistema de orações.</p>
            </div>
        </div>
    </div>
</body>
</html>"#,
        sender = params.sender_name,
        name = display_name,
        prayer = params.prayer,
        response = params.response,
        url = params.unsubscribe_url,
    );

    RenderedEmail {
        subject,
        body_text,
        body_html,
    }
}
